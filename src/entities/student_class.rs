//! StudentClass entity - One class selection (enrollment record) for a year.
//!
//! A row with `paid == 0` (or NULL), `wait == 0`, and `removed == 0` for the
//! current year is "in cart". Once an order covers the row its `paid` flag
//! becomes nonzero and the row is immutable for billing purposes.
//!
//! A row whose `student_id` is NULL is a volunteer-credit row: its
//! `class_id` identifies a volunteer activity rather than a catalog class.
//! That is a legitimate billing row, not corrupt data.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Class selection database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_class")]
pub struct Model {
    /// Unique identifier for the selection
    #[sea_orm(primary_key)]
    pub sc_id: i64,
    /// School year the selection targets
    pub year: i32,
    /// Enrolled student; NULL for family-level volunteer-credit rows
    pub student_id: Option<i64>,
    /// Catalog class id, or a volunteer activity id when `student_id` is NULL
    pub class_id: i64,
    /// Waitlist flag (0 = enrolled, nonzero = waitlisted)
    pub wait: i32,
    /// Payment state (0 or NULL = unpaid/pending, nonzero = paid/finalized)
    pub paid: Option<i32>,
    /// Soft-delete flag (nonzero = removed from the cart)
    pub removed: i32,
    /// Price charged once the selection was covered by an order
    pub paid_price: Option<Decimal>,
    /// When the selection was recorded
    pub created: DateTimeUtc,
}

/// Defines relationships between StudentClass and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each selection belongs to at most one student
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::StudentId"
    )]
    Student,
    /// A selection may be covered by an order via the join table
    #[sea_orm(has_many = "super::order_student_class::Entity")]
    OrderStudentClasses,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

// Each selection references one catalog class (or volunteer activity).
// Declared outside the Relation enum so schema generation does not emit a
// foreign key on `class_id`: volunteer-credit rows point it at a volunteer
// activity id, which a `classes` foreign key would reject.
impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Entity::belongs_to(super::class::Entity)
            .from(Column::ClassId)
            .to(super::class::Column::ClassId)
            .into()
    }
}

impl Related<super::order_student_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStudentClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
