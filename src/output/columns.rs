//! Declarative CSV column layout.
//!
//! Every column is a [`ColumnSpec`]: the source name, the label written to
//! the header line, and how a cell is pulled out of a [`UserRecord`].
//! Order is fixed: common columns, general attributes, then the custom
//! attributes discovered in the pool's CSV header.

use crate::parser::UserRecord;
use crate::utils::config::{
    CHANNEL_TYPE_COLUMN, CUSTOM_ATTRIBUTE_PREFIX, DELIVERY_CHANNEL, GENERAL_ATTRIBUTES,
    MFA_ENABLED_COLUMN, UPDATED_AT_COLUMN, USERNAME_COLUMN, VERIFICATION_FLAG_ATTRIBUTES,
};
use std::borrow::Cow;

/// How a cell value is produced for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellExtractor {
    /// Same value on every row
    Constant(&'static str),
    Username,
    /// `true` / `false`
    MfaEnabled,
    /// Epoch milliseconds, empty when unknown
    LastModified,
    /// Named attribute, or `fallback` when missing or empty
    Attribute { fallback: &'static str },
}

/// One CSV column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Field or attribute name the column is read from
    pub name: String,
    /// Text written in the header line
    pub label: String,
    pub extractor: CellExtractor,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, extractor: CellExtractor) -> Self {
        let name = name.into();
        Self {
            label: header_label(&name),
            name,
            extractor,
        }
    }

    /// Attribute column using the missing-value policy for `name`
    pub fn attribute(name: impl Into<String>) -> Self {
        let name = name.into();
        let fallback = if VERIFICATION_FLAG_ATTRIBUTES.contains(&name.as_str()) {
            "false"
        } else {
            ""
        };
        Self::new(name, CellExtractor::Attribute { fallback })
    }

    /// Cell value for one user, unescaped
    pub fn cell<'r>(&self, record: &UserRecord<'r>) -> Cow<'r, str> {
        match self.extractor {
            CellExtractor::Constant(value) => Cow::Borrowed(value),
            CellExtractor::Username => Cow::Borrowed(record.username),
            CellExtractor::MfaEnabled => Cow::Borrowed(if record.mfa_configured {
                "true"
            } else {
                "false"
            }),
            CellExtractor::LastModified => record
                .last_modified
                .map(|millis| Cow::Owned(millis.to_string()))
                .unwrap_or(Cow::Borrowed("")),
            CellExtractor::Attribute { fallback } => {
                Cow::Borrowed(record.attribute(&self.name).unwrap_or(fallback))
            }
        }
    }
}

/// Identity and metadata columns, independent of the pool's header
pub fn common_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(CHANNEL_TYPE_COLUMN, CellExtractor::Constant(DELIVERY_CHANNEL)),
        ColumnSpec::new(USERNAME_COLUMN, CellExtractor::Username),
        ColumnSpec::new(MFA_ENABLED_COLUMN, CellExtractor::MfaEnabled),
        ColumnSpec::new(UPDATED_AT_COLUMN, CellExtractor::LastModified),
    ]
}

/// Well-known profile attributes
pub fn general_columns() -> Vec<ColumnSpec> {
    GENERAL_ATTRIBUTES.iter().copied().map(ColumnSpec::attribute).collect()
}

/// `custom:` attributes from the pool header, in header order
pub fn custom_columns(header: &[String]) -> Vec<ColumnSpec> {
    header
        .iter()
        .filter(|name| name.starts_with(CUSTOM_ATTRIBUTE_PREFIX))
        .map(|name| ColumnSpec::attribute(name.as_str()))
        .collect()
}

/// Full column list for a pool
pub fn build_columns(header: &[String]) -> Vec<ColumnSpec> {
    let mut columns = common_columns();
    columns.extend(general_columns());
    columns.extend(custom_columns(header));
    columns
}

/// Header label in endpoint-import layout.
///
/// `ChannelType` is kept, the username and email map to the user id and
/// address columns, and every other name becomes
/// `User.UserAttributes.<name>` with its first `:` replaced by `_`.
pub fn header_label(name: &str) -> String {
    match name {
        CHANNEL_TYPE_COLUMN => name.to_string(),
        USERNAME_COLUMN => "User.UserId".to_string(),
        "email" => "Address".to_string(),
        _ => format!("User.UserAttributes.{}", name.replacen(':', "_", 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognito::{AttributeType, UserType};

    fn names(columns: &[ColumnSpec]) -> Vec<&str> {
        columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_custom_columns_filtered_in_header_order() {
        let header = vec![
            "custom:foo".to_string(),
            "sub".to_string(),
            "custom:bar".to_string(),
        ];

        let columns = custom_columns(&header);
        assert_eq!(names(&columns), ["custom:foo", "custom:bar"]);
    }

    #[test]
    fn test_build_columns_order() {
        let header = vec!["email".to_string(), "custom:tier".to_string()];
        let columns = build_columns(&header);

        assert_eq!(
            names(&columns),
            [
                "ChannelType",
                "cognito:username",
                "cognito:mfa_enabled",
                "updated_at",
                "name",
                "email",
                "email_verified",
                "phone_number",
                "phone_number_verified",
                "custom:tier",
            ]
        );
    }

    #[test]
    fn test_header_labels() {
        assert_eq!(header_label("ChannelType"), "ChannelType");
        assert_eq!(header_label("cognito:username"), "User.UserId");
        assert_eq!(header_label("email"), "Address");
        assert_eq!(header_label("cognito:mfa_enabled"), "User.UserAttributes.cognito_mfa_enabled");
        assert_eq!(header_label("custom:a:b"), "User.UserAttributes.custom_a:b");
        assert_eq!(header_label("name"), "User.UserAttributes.name");
    }

    #[test]
    fn test_verification_columns_default_false() {
        let user = UserType {
            username: "alice".to_string(),
            attributes: vec![AttributeType::new("email_verified", "")],
            ..Default::default()
        };
        let record = UserRecord::from_user(&user);

        assert_eq!(ColumnSpec::attribute("email_verified").cell(&record), "false");
        assert_eq!(ColumnSpec::attribute("phone_number_verified").cell(&record), "false");
        assert_eq!(ColumnSpec::attribute("phone_number").cell(&record), "");
        assert_eq!(ColumnSpec::attribute("custom:tier").cell(&record), "");
    }

    #[test]
    fn test_common_cells() {
        let user = UserType {
            username: "bob".to_string(),
            mfa_options: Some(vec![]),
            ..Default::default()
        };
        let record = UserRecord::from_user(&user);
        let cells: Vec<String> = common_columns()
            .iter()
            .map(|c| c.cell(&record).into_owned())
            .collect();

        assert_eq!(cells, ["EMAIL", "bob", "true", ""]);
    }

    #[test]
    fn test_attribute_value_verbatim() {
        let user = UserType {
            username: "carol".to_string(),
            attributes: vec![AttributeType::new("name", "Carol, Jr. \"CJ\"")],
            ..Default::default()
        };
        let record = UserRecord::from_user(&user);

        assert_eq!(ColumnSpec::attribute("name").cell(&record), "Carol, Jr. \"CJ\"");
    }
}
