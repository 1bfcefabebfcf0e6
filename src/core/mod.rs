//! Core business logic - framework-agnostic registration and billing
//! operations.
//!
//! Every function here takes a `&DatabaseConnection` plus an authenticated
//! family identity supplied by the external auth layer, and the target year
//! as an explicit parameter. The core never reads the wall clock itself, so
//! all behavior is deterministic under test.

/// Family-wide shopping cart assembly
pub mod cart;
/// Per-student catalog browsing with selection annotations
pub mod catalog;
/// Order summaries and receipt line-item reconstruction
pub mod orders;
/// Student profile verification and class selection
pub mod registration;
