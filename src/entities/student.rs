//! Student entity - Represents one child enrolled under a family account.
//!
//! The medical and insurance fields are required to be filled in before a
//! student may register for classes; [`crate::core::registration::verify_student`]
//! enforces that precondition.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    /// Unique identifier for the student
    #[sea_orm(primary_key)]
    pub student_id: i64,
    /// Owning family
    pub family_id: i64,
    /// First name (required before registration)
    pub first_name: Option<String>,
    /// Last name (required before registration)
    pub last_name: Option<String>,
    /// Chinese name
    pub chinese_name: Option<String>,
    /// Date of birth (required before registration)
    pub dob: Option<Date>,
    /// Gender (required before registration)
    pub gender: Option<String>,
    /// School grade
    pub grade: Option<String>,
    /// Student's own email, if any
    pub email: Option<String>,
    /// Known medical conditions
    pub medical_cond: Option<String>,
    /// Known allergies
    pub allergy: Option<String>,
    /// Doctor's name (required before registration)
    pub doctor_name: Option<String>,
    /// Doctor's phone (required before registration)
    pub doctor_phone: Option<String>,
    /// Insurance company (required before registration)
    pub ins_company: Option<String>,
    /// Insurance policy number (required before registration)
    pub ins_policy: Option<String>,
}

/// Defines relationships between Student and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each student belongs to one family
    #[sea_orm(
        belongs_to = "super::family::Entity",
        from = "Column::FamilyId",
        to = "super::family::Column::FamilyId"
    )]
    Family,
    /// One student has many class selections
    #[sea_orm(has_many = "super::student_class::Entity")]
    StudentClasses,
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Family.def()
    }
}

impl Related<super::student_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
