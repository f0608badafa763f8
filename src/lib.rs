//! Cognito Export
//!
//! Exports the users of an AWS Cognito user pool to a JSON or CSV file.
//!
//! This crate provides the core implementation for the
//! `cognito-export` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cognito-export export-users --user-pool-id us-east-1_AbCdEf --format csv
//! ```
//!
//! The export lists every user page by page, keeps them in memory, then
//! writes `<user-pool-id>.json` or `<user-pool-id>.csv` in the working
//! directory.

pub mod aggregator;
pub mod cognito;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
