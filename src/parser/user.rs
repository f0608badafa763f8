//! Projection view over a raw `ListUsers` record.
//!
//! The wire record keeps attributes as an ordered list. For projection we
//! build a name-keyed map once per user, keeping the first occurrence of a
//! name so lookups behave like a first-match scan of the list.

use crate::cognito::UserType;
use std::collections::HashMap;

/// Read-only view of one user, borrowed from its [`UserType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord<'a> {
    /// Unique within the pool
    pub username: &'a str,

    /// True when the record carries an `MFAOptions` field, even an empty one
    pub mfa_configured: bool,

    /// `UserLastModifiedDate` in epoch milliseconds
    pub last_modified: Option<i64>,

    attributes: HashMap<&'a str, &'a str>,
}

impl<'a> UserRecord<'a> {
    /// Build the view for a wire record
    pub fn from_user(user: &'a UserType) -> Self {
        let mut attributes = HashMap::with_capacity(user.attributes.len());
        for attribute in &user.attributes {
            attributes
                .entry(attribute.name.as_str())
                .or_insert_with(|| attribute.value.as_deref().unwrap_or(""));
        }

        Self {
            username: &user.username,
            mfa_configured: user.mfa_options.is_some(),
            last_modified: user
                .user_last_modified_date
                .map(|time| time.timestamp_millis()),
            attributes,
        }
    }

    /// Value of the first attribute called `name`, if it exists and is non-empty
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes.get(name).copied().filter(|value| !value.is_empty())
    }
}
