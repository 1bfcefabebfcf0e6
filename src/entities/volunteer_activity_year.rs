//! VolunteerActivityYear entity - Marks an activity as offered for a year.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Volunteer activity year database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "volunteer_activity_year")]
pub struct Model {
    /// Unique identifier for the year link
    #[sea_orm(primary_key)]
    pub vay_id: i64,
    /// The activity offered
    pub volunteer_id: i64,
    /// Year the activity is offered
    pub year: i32,
    /// Credit amount associated with the activity that year
    pub credit: Option<Decimal>,
}

/// Defines relationships between VolunteerActivityYear and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each year link belongs to one activity
    #[sea_orm(
        belongs_to = "super::volunteer_activity::Entity",
        from = "Column::VolunteerId",
        to = "super::volunteer_activity::Column::VolunteerId"
    )]
    VolunteerActivity,
}

impl Related<super::volunteer_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VolunteerActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
