//! Registration business logic - student verification and class selection.
//!
//! `verify_student` is the shared precondition for both catalog reads and
//! selection writes: a family may only act on its own students, and a
//! student must have a complete profile (names, date of birth, gender,
//! doctor, insurance) before registering for classes.

use crate::{
    entities::{student, student_class},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{Set, prelude::*};
use tracing::{debug, instrument};

fn is_blank(field: Option<&str>) -> bool {
    field.is_none_or(|value| value.trim().is_empty())
}

/// Fetches a student and checks the registration preconditions.
///
/// Fails with [`Error::StudentNotFound`] if the student does not exist or
/// belongs to a different family, and with [`Error::IncompleteProfile`] if
/// any required field (first/last name, date of birth, gender, doctor
/// name/phone, insurance company/policy) is blank or absent.
pub async fn verify_student(
    db: &DatabaseConnection,
    student_id: i64,
    family_id: i64,
) -> Result<student::Model> {
    let student = crate::entities::Student::find()
        .filter(student::Column::StudentId.eq(student_id))
        .filter(student::Column::FamilyId.eq(family_id))
        .one(db)
        .await?
        .ok_or(Error::StudentNotFound { student_id })?;

    let complete = !is_blank(student.first_name.as_deref())
        && !is_blank(student.last_name.as_deref())
        && student.dob.is_some()
        && !is_blank(student.gender.as_deref())
        && !is_blank(student.doctor_name.as_deref())
        && !is_blank(student.doctor_phone.as_deref())
        && !is_blank(student.ins_company.as_deref())
        && !is_blank(student.ins_policy.as_deref());

    if !complete {
        return Err(Error::IncompleteProfile { student_id });
    }

    Ok(student)
}

/// Records a new class selection for a verified student.
///
/// The selection starts unpaid, not waitlisted, and not removed, targeting
/// the given year. Duplicate suppression is the caller's responsibility: the
/// frontend does not re-submit an already-selected class, and this function
/// does not check for an existing active row for the same (student, class,
/// year).
#[instrument(skip(db, now))]
pub async fn select_class(
    db: &DatabaseConnection,
    student_id: i64,
    class_id: i64,
    year: i32,
    now: DateTime<Utc>,
) -> Result<student_class::Model> {
    let selection = student_class::ActiveModel {
        year: Set(year),
        student_id: Set(Some(student_id)),
        class_id: Set(class_id),
        wait: Set(0),
        paid: Set(Some(0)),
        removed: Set(0),
        paid_price: Set(None),
        created: Set(now),
        ..Default::default()
    };

    let result = selection.insert(db).await?;
    debug!(sc_id = result.sc_id, "Recorded class selection");
    Ok(result)
}

/// Verifies the student against the acting family, then records the
/// selection. This is the whole write path behind the select-classes
/// endpoint.
pub async fn register_class(
    db: &DatabaseConnection,
    family_id: i64,
    student_id: i64,
    class_id: i64,
    year: i32,
    now: DateTime<Utc>,
) -> Result<student_class::Model> {
    let student = verify_student(db, student_id, family_id).await?;
    select_class(db, student.student_id, class_id, year, now).await
}
