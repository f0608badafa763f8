//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod import;
pub mod models;

// Re-export main command functions
pub use export::{execute_export, export_users, validate_export_args};
pub use import::{execute_import, validate_import_args};
pub use models::{ExportArgs, ExportFormat, ExportPlan, ImportArgs, ImportPlan};
