//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for Cognito API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Attribute names starting with this are pool-specific custom attributes
pub const CUSTOM_ATTRIBUTE_PREFIX: &str = "custom:";

/// Value of the delivery channel column for every exported row
pub const DELIVERY_CHANNEL: &str = "EMAIL";

// Common columns, in output order. These come from the record itself,
// not from its attribute list.
pub const CHANNEL_TYPE_COLUMN: &str = "ChannelType";
pub const USERNAME_COLUMN: &str = "cognito:username";
pub const MFA_ENABLED_COLUMN: &str = "cognito:mfa_enabled";
pub const UPDATED_AT_COLUMN: &str = "updated_at";

/// Well-known profile attributes exported after the common columns
pub const GENERAL_ATTRIBUTES: &[&str] = &[
    "name",
    "email",
    "email_verified",
    "phone_number",
    "phone_number_verified",
];

/// Attributes rendered as `false` instead of an empty field when missing
pub const VERIFICATION_FLAG_ATTRIBUTES: &[&str] = &["email_verified", "phone_number_verified"];
