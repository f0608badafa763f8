//! Import command.
//!
//! Arguments are validated like any other command, then the command fails:
//! importing users is not implemented.

use super::models::{ImportArgs, ImportPlan};
use crate::cognito::region_from_pool_id;
use crate::utils::error::{ImportError, ValidationError};
use anyhow::Result;
use log::warn;

/// Validate import arguments
///
/// The file must exist and carry a `.csv` extension.
pub fn validate_import_args(args: &ImportArgs) -> Result<ImportPlan, ValidationError> {
    let (user_pool_id, file) = match (args.user_pool_id.as_deref(), args.file.as_ref()) {
        (Some(pool), Some(file)) if !pool.is_empty() && !file.as_os_str().is_empty() => (pool, file),
        _ => return Err(ValidationError::MissingImportArguments),
    };

    if !file.exists() {
        return Err(ValidationError::FileNotFound(file.clone()));
    }

    if file.extension().and_then(|ext| ext.to_str()) != Some("csv") {
        return Err(ValidationError::NotCsv(file.clone()));
    }

    Ok(ImportPlan {
        user_pool_id: user_pool_id.to_string(),
        region: region_from_pool_id(user_pool_id).to_string(),
        file: file.clone(),
    })
}

/// Execute the import command
///
/// Always returns an error: validation errors first, then
/// [`ImportError::NotImplemented`].
pub fn execute_import(args: ImportArgs) -> Result<()> {
    let plan = validate_import_args(&args)?;

    warn!(
        "Refusing to import {} into {} ({}): import is not implemented",
        plan.file.display(),
        plan.user_pool_id,
        plan.region
    );

    Err(ImportError::NotImplemented.into())
}
