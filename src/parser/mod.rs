//! Record views used by the CSV projection.
//!
//! This module handles:
//! - Turning raw `ListUsers` entries into lookup-friendly records
//! - Deriving the MFA flag and modification timestamp

pub mod user;

// Re-export main types
pub use user::UserRecord;
