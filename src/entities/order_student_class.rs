//! OrderStudentClass entity - Join table linking orders to selections.
//!
//! One order covers many selections; in this catalog a selection is linked
//! to at most one order once paid.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order-to-selection link database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_student_class")]
pub struct Model {
    /// Unique identifier for the link
    #[sea_orm(primary_key)]
    pub osc_id: i64,
    /// Covered order
    pub order_id: i64,
    /// Covered selection
    pub sc_id: i64,
}

/// Defines relationships between OrderStudentClass and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each link belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::OrderId"
    )]
    Order,
    /// Each link belongs to one selection
    #[sea_orm(
        belongs_to = "super::student_class::Entity",
        from = "Column::ScId",
        to = "super::student_class::Column::ScId"
    )]
    StudentClass,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::student_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
