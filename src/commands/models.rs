use crate::utils::error::ValidationError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension, also the canonical lowercase name
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ValidationError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Arguments for the export-users command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Pool to export, `<region>_<id>`
    pub user_pool_id: Option<String>,

    /// `json` or `csv` in any case; JSON when omitted
    pub format: Option<String>,

    /// Named profile from the shared AWS config and credentials files
    pub profile: Option<String>,

    /// Endpoint override instead of the regional Cognito endpoint
    pub endpoint_url: Option<String>,

    /// Directory receiving `<pool>.<format>`
    pub output_dir: PathBuf,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            user_pool_id: None,
            format: None,
            profile: None,
            endpoint_url: None,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Export arguments after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub user_pool_id: String,
    pub region: String,
    pub format: ExportFormat,
}

impl ExportPlan {
    /// `<pool>.<format>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.user_pool_id, self.format.extension())
    }
}

/// Arguments for the import-users command
#[derive(Debug, Clone, Default)]
pub struct ImportArgs {
    pub user_pool_id: Option<String>,

    /// CSV file to import
    pub file: Option<PathBuf>,
}

/// Import arguments after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    pub user_pool_id: String,
    pub region: String,
    pub file: PathBuf,
}
