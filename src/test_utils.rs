//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    entities::{
        StudentClass, family, order, order_student_class, student, student_class,
        volunteer_activity, volunteer_activity_year,
    },
    errors::Result,
};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, prelude::Date};

/// A fixed timestamp so selection rows are reproducible under test.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test family with filled-in payer names.
pub async fn create_test_family(
    db: &DatabaseConnection,
    email: &str,
) -> Result<family::Model> {
    let now = test_now();
    let family = family::ActiveModel {
        email: Set(email.to_string()),
        father_fname: Set(Some("Wei".to_string())),
        father_lname: Set(Some("Chen".to_string())),
        mother_fname: Set(Some("Lin".to_string())),
        mother_lname: Set(Some("Chen".to_string())),
        father_cname: Set(Some("陳偉".to_string())),
        mother_cname: Set(Some("陳琳".to_string())),
        address: Set(Some("1 School Way".to_string())),
        city: Set(Some("Walnut Creek".to_string())),
        state: Set(Some("CA".to_string())),
        zip: Set(Some("94596".to_string())),
        phone: Set(Some("9255550100".to_string())),
        verified: Set(true),
        created: Set(now),
        modified: Set(now),
        ..Default::default()
    };
    Ok(family.insert(db).await?)
}

fn complete_student(family_id: i64, first: &str, last: &str) -> student::ActiveModel {
    student::ActiveModel {
        family_id: Set(family_id),
        first_name: Set(Some(first.to_string())),
        last_name: Set(Some(last.to_string())),
        chinese_name: Set(Some("小明".to_string())),
        dob: Set(Some(Date::from_ymd_opt(2012, 1, 15).unwrap())),
        gender: Set(Some("f".to_string())),
        grade: Set(Some("5".to_string())),
        email: Set(None),
        medical_cond: Set(None),
        allergy: Set(None),
        doctor_name: Set(Some("Dr. Lee".to_string())),
        doctor_phone: Set(Some("9255550199".to_string())),
        ins_company: Set(Some("Kaiser".to_string())),
        ins_policy: Set(Some("KP-7781".to_string())),
        ..Default::default()
    }
}

/// Creates a test student with a fully complete profile.
pub async fn create_test_student(
    db: &DatabaseConnection,
    family_id: i64,
    first: &str,
    last: &str,
) -> Result<student::Model> {
    Ok(complete_student(family_id, first, last).insert(db).await?)
}

/// Creates a complete test student with a specific date of birth
/// (`YYYY-MM-DD`).
pub async fn create_student_with_dob(
    db: &DatabaseConnection,
    family_id: i64,
    first: &str,
    last: &str,
    dob: &str,
) -> Result<student::Model> {
    let mut student = complete_student(family_id, first, last);
    student.dob = Set(Some(dob.parse().unwrap()));
    Ok(student.insert(db).await?)
}

/// The registration-required student fields.
#[derive(Debug, Clone, Copy)]
pub enum RequiredField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Date of birth
    Dob,
    /// Gender
    Gender,
    /// Doctor's name
    DoctorName,
    /// Doctor's phone
    DoctorPhone,
    /// Insurance company
    InsCompany,
    /// Insurance policy
    InsPolicy,
}

/// Creates a student whose profile is complete except for one required
/// field, which is left absent or blank.
pub async fn create_student_missing_field(
    db: &DatabaseConnection,
    family_id: i64,
    field: RequiredField,
) -> Result<student::Model> {
    let mut student = complete_student(family_id, "Mei", "Chen");
    match field {
        RequiredField::FirstName => student.first_name = Set(None),
        RequiredField::LastName => student.last_name = Set(None),
        RequiredField::Dob => student.dob = Set(None),
        RequiredField::Gender => student.gender = Set(None),
        RequiredField::DoctorName => student.doctor_name = Set(None),
        RequiredField::DoctorPhone => student.doctor_phone = Set(Some(String::new())),
        RequiredField::InsCompany => student.ins_company = Set(None),
        // Whitespace-only also counts as blank
        RequiredField::InsPolicy => student.ins_policy = Set(Some("   ".to_string())),
    }
    Ok(student.insert(db).await?)
}

/// Sets up a complete test environment with a family and one complete
/// student. Returns (db, family, student) for common test scenarios.
pub async fn setup_with_student() -> Result<(
    DatabaseConnection,
    family::Model,
    student::Model,
)> {
    let db = setup_test_db().await?;
    let family = create_test_family(&db, "parent@example.com").await?;
    let student = create_test_student(&db, family.family_id, "Mei", "Chen").await?;
    Ok((db, family, student))
}

/// Creates a catalog class entry.
pub async fn create_test_class(
    db: &DatabaseConnection,
    category: &str,
    weight: i32,
    title: &str,
) -> Result<crate::entities::class::Model> {
    let class = crate::entities::class::ActiveModel {
        category: Set(category.to_string()),
        class_code: Set(None),
        title: Set(title.to_string()),
        chinese_title: Set(Some("中文班".to_string())),
        weight: Set(weight),
        ..Default::default()
    };
    Ok(class.insert(db).await?)
}

/// Creates a selection that has already been paid and priced, as the
/// checkout layer leaves it.
pub async fn create_paid_selection(
    db: &DatabaseConnection,
    student_id: i64,
    class_id: i64,
    year: i32,
    price: Decimal,
) -> Result<student_class::Model> {
    let selection = student_class::ActiveModel {
        year: Set(year),
        student_id: Set(Some(student_id)),
        class_id: Set(class_id),
        wait: Set(0),
        paid: Set(Some(1)),
        removed: Set(0),
        paid_price: Set(Some(price)),
        created: Set(test_now()),
        ..Default::default()
    };
    Ok(selection.insert(db).await?)
}

/// Creates a paid volunteer-credit selection: no student, `class_id`
/// pointing at a volunteer activity.
pub async fn create_volunteer_selection(
    db: &DatabaseConnection,
    volunteer_id: i64,
    year: i32,
    price: Decimal,
) -> Result<student_class::Model> {
    let selection = student_class::ActiveModel {
        year: Set(year),
        student_id: Set(None),
        class_id: Set(volunteer_id),
        wait: Set(0),
        paid: Set(Some(1)),
        removed: Set(0),
        paid_price: Set(Some(price)),
        created: Set(test_now()),
        ..Default::default()
    };
    Ok(selection.insert(db).await?)
}

/// Flips a selection's waitlist flag on.
pub async fn mark_selection_waitlisted(db: &DatabaseConnection, sc_id: i64) -> Result<()> {
    let mut selection: student_class::ActiveModel = StudentClass::find_by_id(sc_id)
        .one(db)
        .await?
        .unwrap()
        .into();
    selection.wait = Set(1);
    selection.update(db).await?;
    Ok(())
}

/// Soft-deletes a selection.
pub async fn mark_selection_removed(db: &DatabaseConnection, sc_id: i64) -> Result<()> {
    let mut selection: student_class::ActiveModel = StudentClass::find_by_id(sc_id)
        .one(db)
        .await?
        .unwrap()
        .into();
    selection.removed = Set(1);
    selection.update(db).await?;
    Ok(())
}

/// Creates an order header as the checkout layer would.
pub async fn create_test_order(
    db: &DatabaseConnection,
    family_id: i64,
    paid: Option<i32>,
) -> Result<order::Model> {
    let order = order::ActiveModel {
        family_id: Set(family_id),
        created: Set(test_now()),
        paid: Set(paid),
        amount: Set(None),
        ..Default::default()
    };
    Ok(order.insert(db).await?)
}

/// Links a selection to an order.
pub async fn link_selection(
    db: &DatabaseConnection,
    order_id: i64,
    sc_id: i64,
) -> Result<order_student_class::Model> {
    let link = order_student_class::ActiveModel {
        order_id: Set(order_id),
        sc_id: Set(sc_id),
        ..Default::default()
    };
    Ok(link.insert(db).await?)
}

/// Creates a volunteer activity offered for the given year.
pub async fn create_volunteer_activity(
    db: &DatabaseConnection,
    name: &str,
    year: i32,
) -> Result<volunteer_activity::Model> {
    let activity = volunteer_activity::ActiveModel {
        name: Set(name.to_string()),
        chinese_name: Set(None),
        ..Default::default()
    };
    let activity = activity.insert(db).await?;

    let offered = volunteer_activity_year::ActiveModel {
        volunteer_id: Set(activity.volunteer_id),
        year: Set(year),
        credit: Set(None),
        ..Default::default()
    };
    offered.insert(db).await?;

    Ok(activity)
}
