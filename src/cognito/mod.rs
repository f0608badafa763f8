//! Cognito Identity Provider access.
//!
//! This module handles:
//! - Loading the AWS SDK configuration (region, profile, endpoint)
//! - The two remote operations used by the exporter
//! - Converting SDK output into owned, serializable records

pub mod client;
pub mod types;

pub use client::{region_from_pool_id, ClientConfig, CognitoClient};
pub use types::{AttributeType, ListUsersResponse, MfaOptionType, UserType};

use crate::utils::error::CognitoError;

/// The remote user directory the export pipeline reads from.
///
/// Implemented by [`CognitoClient`]; tests substitute scripted pages.
pub trait UserDirectory {
    /// Fetch one page of users, continuing from `pagination_token` when given
    fn list_users(
        &self,
        user_pool_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<ListUsersResponse, CognitoError>;

    /// Fetch the pool's CSV import header (attribute names)
    fn get_csv_header(&self, user_pool_id: &str) -> Result<Vec<String>, CognitoError>;
}
