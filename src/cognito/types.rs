//! Owned user records for the export pipeline.
//!
//! SDK output types are converted into these serde structs so the JSON export
//! keeps the service's PascalCase field names, and so exports can be read
//! back in.

use aws_sdk_cognitoidentityprovider::primitives::DateTime as SdkDateTime;
use aws_sdk_cognitoidentityprovider::types as sdk;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of `ListUsers` output
#[derive(Debug, Clone, Default)]
pub struct ListUsersResponse {
    pub users: Vec<UserType>,

    /// Present while more pages remain
    pub pagination_token: Option<String>,
}

/// A user as returned by `ListUsers`.
///
/// Fields the exporter does not interpret are kept in `extra` so the JSON
/// export writes the record back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserType {
    #[serde(default)]
    pub username: String,

    /// Ordered as received; names may repeat
    #[serde(default)]
    pub attributes: Vec<AttributeType>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub user_create_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub user_last_modified_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,

    #[serde(rename = "MFAOptions", default, skip_serializing_if = "Option::is_none")]
    pub mfa_options: Option<Vec<MfaOptionType>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single `{Name, Value}` user attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AttributeType {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            extra: serde_json::Map::new(),
        }
    }
}

/// Legacy SMS MFA setting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaOptionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<&sdk::UserType> for UserType {
    fn from(user: &sdk::UserType) -> Self {
        Self {
            username: user.username().unwrap_or_default().to_string(),
            attributes: user.attributes().iter().map(AttributeType::from).collect(),
            user_create_date: user.user_create_date().and_then(to_chrono),
            user_last_modified_date: user.user_last_modified_date().and_then(to_chrono),
            enabled: Some(user.enabled()),
            user_status: user.user_status().map(|status| status.as_str().to_string()),
            // Presence matters here, so read the field rather than the slice accessor
            mfa_options: user
                .mfa_options
                .as_ref()
                .map(|options| options.iter().map(MfaOptionType::from).collect()),
            extra: serde_json::Map::new(),
        }
    }
}

impl From<&sdk::AttributeType> for AttributeType {
    fn from(attribute: &sdk::AttributeType) -> Self {
        Self {
            name: attribute.name().to_string(),
            value: attribute.value().map(str::to_string),
            extra: serde_json::Map::new(),
        }
    }
}

impl From<&sdk::MfaOptionType> for MfaOptionType {
    fn from(option: &sdk::MfaOptionType) -> Self {
        Self {
            delivery_medium: option.delivery_medium().map(|medium| medium.as_str().to_string()),
            attribute_name: option.attribute_name().map(str::to_string),
            extra: serde_json::Map::new(),
        }
    }
}

fn to_chrono(time: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.secs(), time.subsec_nanos())
}

/// Timestamps arrive as epoch seconds (JSON 1.1 wire format) or as
/// RFC 3339 strings (re-read exports). They are written back as RFC 3339
/// with millisecond precision.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Seconds(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawTimestamp>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawTimestamp::Seconds(seconds)) => {
                let millis = (seconds * 1000.0).round() as i64;
                DateTime::from_timestamp_millis(millis)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {}", seconds)))
            }
            Some(RawTimestamp::Text(text)) => DateTime::parse_from_rfc3339(&text)
                .map(|time| Some(time.with_timezone(&Utc)))
                .map_err(de::Error::custom),
        }
    }
}
