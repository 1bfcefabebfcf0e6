//! Unified error types for the registration core.
//!
//! Variants map onto the status codes the external HTTP layer uses:
//! the `*NotFound` variants surface as 404, [`Error::IncompleteProfile`]
//! as 409, [`Error::Validation`] as 400. Storage failures propagate
//! unchanged from `SeaORM`.

use thiserror::Error;

/// All errors the registration core can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Student does not exist or is owned by a different family.
    #[error("Student {student_id} not found")]
    StudentNotFound {
        /// Requested student id
        student_id: i64,
    },

    /// Family row is missing for an authenticated identity.
    #[error("Family {family_id} not found")]
    FamilyNotFound {
        /// Requested family id
        family_id: i64,
    },

    /// Order does not exist, is owned by a different family, or has no
    /// payment status yet.
    #[error("Order {order_id} not found")]
    OrderNotFound {
        /// Requested order id
        order_id: i64,
    },

    /// A selection row referenced a volunteer activity that is not on file.
    #[error("Volunteer activity {volunteer_id} not found")]
    ActivityNotFound {
        /// The `class_id` of the selection row, interpreted as a volunteer id
        volunteer_id: i64,
    },

    /// Student profile incomplete. Fill required fields before registering
    /// classes.
    #[error("Student {student_id} profile incomplete; fill required fields before registering classes")]
    IncompleteProfile {
        /// The student whose profile is missing required fields
        student_id: i64,
    },

    /// Malformed or missing input fields.
    #[error("Validation failure: {message}")]
    Validation {
        /// What was malformed
        message: String,
    },

    /// Configuration error (config.toml, environment).
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying storage error, propagated unchanged.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
