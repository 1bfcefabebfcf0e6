//! Family entity - Represents one household account.
//!
//! A family owns students and orders. It is created at signup by the
//! external account layer and never hard-deleted; this core reads its
//! identity, payer display names, and the `verified` flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Family database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "family")]
pub struct Model {
    /// Unique identifier for the family
    #[sea_orm(primary_key)]
    pub family_id: i64,
    /// Primary contact email, unique per account
    pub email: String,
    /// Father's first name
    pub father_fname: Option<String>,
    /// Father's last name
    pub father_lname: Option<String>,
    /// Mother's first name
    pub mother_fname: Option<String>,
    /// Mother's last name
    pub mother_lname: Option<String>,
    /// Father's Chinese name
    pub father_cname: Option<String>,
    /// Mother's Chinese name
    pub mother_cname: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State
    pub state: Option<String>,
    /// ZIP code
    pub zip: Option<String>,
    /// Primary phone number
    pub phone: Option<String>,
    /// Whether the account has been verified by the office
    pub verified: bool,
    /// When the account was created
    pub created: DateTimeUtc,
    /// When the account was last modified
    pub modified: DateTimeUtc,
}

/// Defines relationships between Family and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One family has many students
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
    /// One family has many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
