//! Output writers for exported users.
//!
//! This module handles writing data to disk in the two export formats:
//! - JSON (raw user records)
//! - CSV (declarative column projection)

pub mod columns;
pub mod csv;
pub mod json;

use crate::utils::error::OutputError;
use std::path::Path;

// Re-export main functions
pub use self::columns::{build_columns, CellExtractor, ColumnSpec};
pub use self::csv::{render_csv, write_csv};
pub use self::json::write_users_json;

/// Validate that an output path can be written as a file
///
/// **Public** - shared by both writers
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
