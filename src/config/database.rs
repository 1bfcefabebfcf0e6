//! Database configuration module.
//!
//! This module handles database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all
//! necessary tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to automatically generate SQL
//! statements from the entity models, ensuring that the database schema matches
//! the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    Class, Family, Order, OrderStudentClass, Student, StudentClass, VolunteerActivity,
    VolunteerActivityYear,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

/// Gets the database URL from the environment or returns the default
/// `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/cococs.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL`
/// environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is
/// set. This function handles connection errors and provides a clean interface
/// for database access throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {database_url}");

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation
/// from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate
/// proper SQL statements for table creation, ensuring the database schema
/// matches the Rust struct definitions. It creates tables for families,
/// students, the class catalog, selections, orders, order links, and
/// volunteer activities.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let family_table = schema.create_table_from_entity(Family);
    let student_table = schema.create_table_from_entity(Student);
    let class_table = schema.create_table_from_entity(Class);
    let student_class_table = schema.create_table_from_entity(StudentClass);
    let order_table = schema.create_table_from_entity(Order);
    let order_student_class_table = schema.create_table_from_entity(OrderStudentClass);
    let volunteer_activity_table = schema.create_table_from_entity(VolunteerActivity);
    let volunteer_activity_year_table = schema.create_table_from_entity(VolunteerActivityYear);

    db.execute(builder.build(&family_table)).await?;
    db.execute(builder.build(&student_table)).await?;
    db.execute(builder.build(&class_table)).await?;
    db.execute(builder.build(&student_class_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&order_student_class_table)).await?;
    db.execute(builder.build(&volunteer_activity_table)).await?;
    db.execute(builder.build(&volunteer_activity_year_table))
        .await?;

    Ok(())
}
