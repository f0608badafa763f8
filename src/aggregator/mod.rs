//! Aggregation of paginated `ListUsers` responses.
//!
//! This module turns a sequence of remote pages into one in-memory,
//! ordered list of users.

pub mod pagination;

// Re-export main functions
pub use pagination::collect_users;
