//! JSON user export writer.
//!
//! Writes the aggregated users as one compact JSON array.

use super::validate_path;
use crate::cognito::UserType;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write users to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `users` - Aggregated users, written as received
/// * `output_path` - Path to output JSON file (replaced if it exists)
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty or a directory
pub fn write_users_json(users: &[UserType], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} users to: {}", users.len(), output_path.display());

    validate_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, users).map_err(OutputError::SerializationFailed)?;

    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "JSON written successfully ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}
