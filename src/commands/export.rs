//! Export command implementation.
//!
//! The export command:
//! 1. Validates arguments (before any remote call)
//! 2. Loads the AWS configuration and builds the client
//! 3. Pages through every user of the pool
//! 4. Fetches the CSV header (CSV only)
//! 5. Writes `<pool>.<format>`

use super::models::{ExportArgs, ExportFormat, ExportPlan};
use crate::aggregator::collect_users;
use crate::cognito::{region_from_pool_id, ClientConfig, CognitoClient, UserDirectory};
use crate::output::{render_csv, write_csv, write_users_json};
use crate::utils::error::ValidationError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Validate export arguments
///
/// **Public** - can be called before execute_export for early validation
///
/// # Returns
/// The pool id, region and format to export with
pub fn validate_export_args(args: &ExportArgs) -> Result<ExportPlan, ValidationError> {
    let user_pool_id = args
        .user_pool_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingUserPoolId)?;

    let format = match args.format.as_deref() {
        None | Some("") => ExportFormat::default(),
        Some(format) => format.parse::<ExportFormat>()?,
    };

    Ok(ExportPlan {
        user_pool_id: user_pool_id.to_string(),
        region: region_from_pool_id(user_pool_id).to_string(),
        format,
    })
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// * Invalid arguments (no remote call is made)
/// * Missing credentials (reported by the first request)
/// * Any failed page or header request
/// * File write errors
pub fn execute_export(args: ExportArgs) -> Result<PathBuf> {
    let plan = validate_export_args(&args)?;

    let mut config = ClientConfig::new(plan.region.clone());
    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }
    if let Some(endpoint) = args.endpoint_url {
        config = config.with_endpoint(endpoint);
    }
    debug!("Client config: {:?}", config);

    let client = CognitoClient::new(config).context("Failed to create Cognito client")?;

    export_users(&client, &plan, &args.output_dir)
}

/// Run a validated export against any user directory
///
/// **Public** - lets tests drive the pipeline without the network
pub fn export_users<D>(directory: &D, plan: &ExportPlan, output_dir: &Path) -> Result<PathBuf>
where
    D: UserDirectory + ?Sized,
{
    let start_time = Instant::now();

    info!(
        "Exporting user pool {} ({}) as {}",
        plan.user_pool_id, plan.region, plan.format
    );

    info!("Step 1/2: Listing users...");
    let users = collect_users(directory, &plan.user_pool_id)
        .with_context(|| format!("Failed to list users of {}", plan.user_pool_id))?;

    let output_path = output_dir.join(plan.file_name());

    info!("Step 2/2: Writing {} output...", plan.format);
    match plan.format {
        ExportFormat::Json => {
            write_users_json(&users, &output_path).context("Failed to write JSON export")?;
        }
        ExportFormat::Csv => {
            let header = directory
                .get_csv_header(&plan.user_pool_id)
                .with_context(|| format!("Failed to fetch CSV header of {}", plan.user_pool_id))?;
            debug!("CSV header: {:?}", header);

            let text = render_csv(&users, &header).context("Failed to render CSV export")?;
            write_csv(&text, &output_path).context("Failed to write CSV export")?;
        }
    }

    info!("✓ Export written to: {}", output_path.display());
    info!("Export completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(output_path)
}
