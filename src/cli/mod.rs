//! Command-line interface
//!
//! This module contains the clap command structures and their implementations.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::exec::ExecArgs;
use commands::plan::PlanArgs;

pub use output::handle_error;

#[derive(Parser, Debug)]
#[command(name = "vcap-env")]
#[command(
    about = "Expose Cloud Foundry service credentials as environment variables",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "VCAP_ENV_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which variables would be set, without setting them
    Plan(PlanArgs),

    /// Bind credentials, then run a program with the resulting environment
    Exec(ExecArgs),
}
