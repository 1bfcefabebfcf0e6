//! Order entity - A checkout produced by the payment layer.
//!
//! Orders are created at checkout finalization outside this core and are
//! referenced read-only here for statements and receipts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub order_id: i64,
    /// Owning family
    pub family_id: i64,
    /// When the order was created
    pub created: DateTimeUtc,
    /// Payment status (NULL = pending, 0 = explicitly unpaid, nonzero = paid)
    pub paid: Option<i32>,
    /// Total amount recorded by the payment layer
    pub amount: Option<Decimal>,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one family
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::FamilyId"
    )]
    Family,
    /// One order covers many selections via the join table
    #[sea_orm(has_many = "super::order_student_class::Entity")]
    OrderStudentClasses,
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl Related<super::order_student_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
