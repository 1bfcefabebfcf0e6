//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod class;
pub mod family;
pub mod order;
pub mod order_student_class;
pub mod student;
pub mod student_class;
pub mod volunteer_activity;
pub mod volunteer_activity_year;

// Re-export specific types to avoid conflicts
pub use class::{Column as ClassColumn, Entity as Class, Model as ClassModel};
pub use family::{Column as FamilyColumn, Entity as Family, Model as FamilyModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_student_class::{
    Column as OrderStudentClassColumn, Entity as OrderStudentClass,
    Model as OrderStudentClassModel,
};
pub use student::{Column as StudentColumn, Entity as Student, Model as StudentModel};
pub use student_class::{
    Column as StudentClassColumn, Entity as StudentClass, Model as StudentClassModel,
};
pub use volunteer_activity::{
    Column as VolunteerActivityColumn, Entity as VolunteerActivity,
    Model as VolunteerActivityModel,
};
pub use volunteer_activity_year::{
    Column as VolunteerActivityYearColumn, Entity as VolunteerActivityYear,
    Model as VolunteerActivityYearModel,
};
