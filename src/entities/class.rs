//! Class entity - One catalog entry in the currently-offered class list.
//!
//! Catalog entries are managed by an administrative tool and are read-only
//! from this core's perspective. `weight` controls display ordering within
//! a category.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog class database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    /// Unique identifier for the catalog entry
    #[sea_orm(primary_key)]
    pub class_id: i64,
    /// Category code (e.g. "LC", "CSL", "EP")
    pub category: String,
    /// Optional short code used on printed schedules
    pub class_code: Option<String>,
    /// English display title
    pub title: String,
    /// Chinese display title
    pub chinese_title: Option<String>,
    /// Display ordering within the category, ascending
    pub weight: i32,
}

/// Defines relationships between Class and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One catalog entry has many selections across students and years
    #[sea_orm(has_many = "super::student_class::Entity")]
    StudentClasses,
}

impl Related<super::student_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
