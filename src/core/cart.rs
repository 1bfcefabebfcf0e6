//! Cart assembly business logic.
//!
//! The cart is the set of current-year selections across all of a family's
//! students that are unpaid, not waitlisted, and not removed. Each cart
//! line carries the full selection record joined with student display names,
//! class titles, and the family's `verified` flag, ordered by student date
//! of birth then class id so receipts come out deterministic.

use crate::{
    entities::{Class, Family, Student, StudentClass, class, student, student_class},
    errors::{Error, Result},
};
use sea_orm::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// One line of the family cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    /// The full selection record
    #[serde(flatten)]
    pub selection: student_class::Model,
    /// Family verification flag, repeated on every line for the frontend
    pub verified: bool,
    /// Student's first name
    pub first_name: Option<String>,
    /// Student's last name
    pub last_name: Option<String>,
    /// Student's Chinese name
    pub chinese_name: Option<String>,
    /// Class English title
    pub title: Option<String>,
    /// Class Chinese title
    pub chinese_title: Option<String>,
}

/// Assembles the family's cart for the given year.
///
/// Returns one item per unpaid, non-waitlisted, non-removed selection across
/// all of the family's students, ordered by student date of birth ascending
/// then class id ascending. An empty vec is a valid empty cart; the only
/// error case is a missing family row.
pub async fn family_cart(
    db: &DatabaseConnection,
    family_id: i64,
    year: i32,
) -> Result<Vec<CartItem>> {
    let family = Family::find_by_id(family_id)
        .one(db)
        .await?
        .ok_or(Error::FamilyNotFound { family_id })?;

    let students = Student::find()
        .filter(student::Column::FamilyId.eq(family_id))
        .all(db)
        .await?;
    let student_by_id: HashMap<i64, &student::Model> = students
        .iter()
        .map(|student| (student.student_id, student))
        .collect();

    let student_ids: Vec<i64> = students.iter().map(|student| student.student_id).collect();
    let mut selections = StudentClass::find()
        .filter(student_class::Column::StudentId.is_in(student_ids))
        .filter(student_class::Column::Paid.eq(0))
        .filter(student_class::Column::Wait.eq(0))
        .filter(student_class::Column::Removed.eq(0))
        .filter(student_class::Column::Year.eq(year))
        .all(db)
        .await?;

    let class_ids: Vec<i64> = selections.iter().map(|selection| selection.class_id).collect();
    let class_by_id: HashMap<i64, class::Model> = Class::find()
        .filter(class::Column::ClassId.is_in(class_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|class| (class.class_id, class))
        .collect();

    selections.sort_by(|a, b| {
        let dob_a = a
            .student_id
            .and_then(|id| student_by_id.get(&id))
            .and_then(|student| student.dob);
        let dob_b = b
            .student_id
            .and_then(|id| student_by_id.get(&id))
            .and_then(|student| student.dob);
        dob_a.cmp(&dob_b).then(a.class_id.cmp(&b.class_id))
    });

    let items = selections
        .into_iter()
        .map(|selection| {
            let student = selection
                .student_id
                .and_then(|id| student_by_id.get(&id).copied());
            let class = class_by_id.get(&selection.class_id);
            CartItem {
                selection,
                verified: family.verified,
                first_name: student.and_then(|s| s.first_name.clone()),
                last_name: student.and_then(|s| s.last_name.clone()),
                chinese_name: student.and_then(|s| s.chinese_name.clone()),
                title: class.map(|c| c.title.clone()),
                chinese_title: class.and_then(|c| c.chinese_title.clone()),
            }
        })
        .collect();

    Ok(items)
}
