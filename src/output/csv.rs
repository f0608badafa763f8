//! CSV rendering and output.
//!
//! Records go through a `csv` writer with quoting disabled, so values
//! containing commas, quotes or line breaks produce malformed rows. Lines
//! end with CRLF, the header line included.

use super::columns::{build_columns, ColumnSpec};
use super::validate_path;
use crate::cognito::UserType;
use crate::parser::UserRecord;
use crate::utils::error::OutputError;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, info};
use std::borrow::Cow;
use std::path::Path;

/// Render users as CSV text
///
/// **Public** - main entry point for CSV projection
///
/// # Arguments
/// * `users` - Aggregated users, in export order
/// * `header` - Attribute names from `GetCSVHeader`; only `custom:` names are used
///
/// # Returns
/// Header line followed by one line per user. Identical input always yields
/// identical bytes.
pub fn render_csv(users: &[UserType], header: &[String]) -> Result<String, OutputError> {
    let columns = build_columns(header);
    debug!("CSV layout: {} columns", columns.len());

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(header_record(&columns))?;
    for user in users {
        let record = UserRecord::from_user(user);
        writer.write_record(row_record(&columns, &record).iter().map(|c| c.as_bytes()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::WriteFailed(e.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}

/// Header labels for a column list
pub fn header_record(columns: &[ColumnSpec]) -> Vec<&str> {
    columns.iter().map(|c| c.label.as_str()).collect()
}

/// Cells of one user, in column order
pub fn row_record<'r>(columns: &[ColumnSpec], record: &UserRecord<'r>) -> Vec<Cow<'r, str>> {
    columns.iter().map(|c| c.cell(record)).collect()
}

/// Write CSV text to a file in a single write, replacing any existing file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty or a directory
pub fn write_csv(contents: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing CSV to: {}", output_path.display());

    validate_path(output_path)?;

    std::fs::write(output_path, contents).map_err(OutputError::WriteFailed)?;

    info!("CSV written successfully ({} bytes)", contents.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cognito::AttributeType;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    const BASE_HEADER: &str = "ChannelType,User.UserId,User.UserAttributes.cognito_mfa_enabled,\
User.UserAttributes.updated_at,User.UserAttributes.name,Address,\
User.UserAttributes.email_verified,User.UserAttributes.phone_number,\
User.UserAttributes.phone_number_verified";

    #[test]
    fn test_empty_export_is_header_only() {
        let text = render_csv(&[], &[]).unwrap();
        assert_eq!(text, format!("{}\r\n", BASE_HEADER));
    }

    #[test]
    fn test_row_layout() {
        let users = vec![UserType {
            username: "alice".to_string(),
            attributes: vec![
                AttributeType::new("email", "alice@example.com"),
                AttributeType::new("email_verified", "true"),
                AttributeType::new("custom:tier", "gold"),
            ],
            user_last_modified_date: Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        }];
        let header = vec!["custom:tier".to_string()];

        let text = render_csv(&users, &header).unwrap();

        assert_eq!(
            text,
            format!(
                "{},User.UserAttributes.custom_tier\r\n\
                 EMAIL,alice,false,1577836800000,,alice@example.com,true,,false,gold\r\n",
                BASE_HEADER
            )
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let users = vec![UserType {
            username: "bob".to_string(),
            attributes: vec![AttributeType::new("name", "Smith, Bob")],
            ..Default::default()
        }];

        let text = render_csv(&users, &[]).unwrap();
        let row = text.split("\r\n").nth(1).unwrap();
        assert_eq!(row, "EMAIL,bob,false,,Smith, Bob,,false,,false");
    }

    #[test]
    fn test_quotes_and_line_breaks_pass_through() {
        let users = vec![UserType {
            username: "carol".to_string(),
            attributes: vec![AttributeType::new("custom:note", "say \"hi\"\nbye")],
            ..Default::default()
        }];
        let header = vec!["custom:note".to_string()];

        let text = render_csv(&users, &header).unwrap();
        assert!(text.ends_with(",false,,false,say \"hi\"\nbye\r\n"), "got: {:?}", text);
    }

    #[test]
    fn test_write_csv_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("pool.csv");

        write_csv("old contents that are longer\r\n", &path).unwrap();
        write_csv("a,b\r\n", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\r\n");
    }

    #[test]
    fn test_write_csv_rejects_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_csv("x", temp_dir.path()).is_err());
    }
}
