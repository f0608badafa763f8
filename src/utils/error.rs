//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the Cognito API
#[derive(Error, Debug)]
pub enum CognitoError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Cognito returned {code}: {message}")]
    Service { code: String, message: String },

    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Invalid command-line input, detected before any remote call
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing arguments: --user-pool-id is required")]
    MissingUserPoolId,

    #[error("Missing arguments: --user-pool-id and --file are required")]
    MissingImportArguments,

    #[error("Invalid export format '{0}': only JSON and CSV are supported")]
    InvalidFormat(String),

    #[error("The specified file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("The specified file is not in CSV format: {0}")]
    NotCsv(PathBuf),
}

/// Errors from the import command
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Importing users is not implemented")]
    NotImplemented,
}
