//! Cognito Export CLI
//!
//! Exports the users of an AWS Cognito user pool to JSON or CSV.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use cognito_export::commands::{execute_export, execute_import, ExportArgs, ImportArgs};
use cognito_export::utils::error::ValidationError;

const CREDENTIALS_HELP: &str = "\
Credentials come from --profile when given, otherwise from the standard AWS
chain: environment variables, ~/.aws/config and ~/.aws/credentials profiles
(including role and SSO profiles), then container or instance roles.";

/// Cognito Export - dump user pool users to JSON or CSV
#[derive(Parser, Debug)]
#[command(name = "cognito-export")]
#[command(version, about, long_about = None, after_help = CREDENTIALS_HELP)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export every user of a pool to <user-pool-id>.<format>
    ExportUsers {
        /// User pool id, e.g. us-east-1_AbCdEf
        #[arg(long)]
        user_pool_id: Option<String>,

        /// Output format: json (default) or csv, in any case
        #[arg(long)]
        format: Option<String>,

        /// Named profile from the shared AWS config and credentials files
        #[arg(long)]
        profile: Option<String>,

        /// Cognito endpoint override
        #[arg(long, env = "COGNITO_ENDPOINT_URL")]
        endpoint_url: Option<String>,
    },

    /// Import users from a CSV file (not implemented)
    ImportUsers {
        /// User pool id, e.g. us-east-1_AbCdEf
        #[arg(long)]
        user_pool_id: Option<String>,

        /// CSV file to import
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = match Cli::try_parse_from(normalize_flag_names(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Arguments: {:?}", std::env::args_os().collect::<Vec<_>>());

    let Some(command) = cli.command else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    // Execute command
    let result = match command {
        Commands::ExportUsers {
            user_pool_id,
            format,
            profile,
            endpoint_url,
        } => execute_export(ExportArgs {
            user_pool_id,
            format,
            profile,
            endpoint_url,
            ..Default::default()
        })
        .map(|_| ()),

        Commands::ImportUsers { user_pool_id, file } => {
            execute_import(ImportArgs { user_pool_id, file })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err.downcast_ref::<ValidationError>().is_some() {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

/// Print the top-level help text
fn print_usage() {
    let _ = Cli::command().print_help();
    println!();
}

/// Lowercase long flag names so `--Format CsV` parses like `--format CsV`.
///
/// Values, short flags and anything after a bare `--` are left alone.
fn normalize_flag_names<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;

    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            match text.strip_prefix("--") {
                Some(flag) => match flag.split_once('=') {
                    Some((name, value)) => format!("--{}={}", name.to_ascii_lowercase(), value).into(),
                    None => format!("--{}", flag.to_ascii_lowercase()).into(),
                },
                None => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_flag_names() {
        let normalized = normalize_flag_names(os_args(&[
            "cognito-export",
            "export-users",
            "--User-Pool-Id",
            "us-east-1_AbC",
            "--Format=CsV",
            "-v",
        ]));

        assert_eq!(
            normalized,
            os_args(&[
                "cognito-export",
                "export-users",
                "--user-pool-id",
                "us-east-1_AbC",
                "--format=CsV",
                "-v",
            ])
        );
    }

    #[test]
    fn test_mixed_case_format_flag_parses() {
        let cli = Cli::try_parse_from(normalize_flag_names(os_args(&[
            "cognito-export",
            "export-users",
            "--user-pool-id",
            "us-east-1_AbC",
            "--Format",
            "CsV",
        ])))
        .unwrap();

        match cli.command {
            Some(Commands::ExportUsers { format, .. }) => assert_eq!(format.as_deref(), Some("CsV")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_invalid_subcommand() {
        let err = Cli::try_parse_from(["cognito-export", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["cognito-export"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
