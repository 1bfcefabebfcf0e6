//! VolunteerActivity entity - A named family-level activity credit.
//!
//! Volunteer activities appear on receipts through selection rows with no
//! student attached; the row's `class_id` points here instead of at the
//! class catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Volunteer activity database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "volunteer_activities")]
pub struct Model {
    /// Unique identifier for the activity
    #[sea_orm(primary_key)]
    pub volunteer_id: i64,
    /// Display name (e.g. "Beach Cleanup")
    pub name: String,
    /// Chinese display name
    pub chinese_name: Option<String>,
}

/// Defines relationships between VolunteerActivity and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One activity is offered across many years
    #[sea_orm(has_many = "super::volunteer_activity_year::Entity")]
    Years,
}

impl Related<super::volunteer_activity_year::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Years.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
