//! Implementation of the `vcap-env exec` command.

use anyhow::{Context, Result};
use clap::Args;
use std::process::{Command, ExitStatus};

use crate::domain::models::Config;
use crate::infrastructure::env::SystemEnv;
use crate::services::binder::{BindReport, Binder};

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Program to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Bind credentials into this process, then run the program and return its
/// exit code. A malformed source variable aborts before anything is launched.
pub fn execute(args: &ExecArgs, config: &Config) -> Result<i32> {
    let (program, program_args) = args
        .command
        .split_first()
        .context("No program given to exec")?;

    let report = Binder::new(SystemEnv)
        .with_source_var(&config.source_var)
        .bind()
        .with_context(|| format!("Failed to bind service credentials from {}", config.source_var))?;
    log_report(&report);

    tracing::debug!(program = %program, "launching");
    let status = Command::new(program)
        .args(program_args)
        .status()
        .with_context(|| format!("Failed to launch {program}"))?;

    Ok(exit_code(status))
}

fn log_report(report: &BindReport) {
    tracing::info!(
        bound = report.bound.len(),
        preexisting = report.preexisting.len(),
        shadowed = report.shadowed.len(),
        skipped_instances = report.skipped_instances.len(),
        "bound service credentials"
    );
    for name in &report.bound {
        tracing::debug!(env_name = %name, "set");
    }
    for skipped in &report.skipped_instances {
        tracing::debug!(
            service = %skipped.service,
            label = %skipped.label,
            "skipped service with unsupported credentials"
        );
    }
    for rejected in &report.rejected {
        tracing::warn!(env_name = ?rejected.env_name, reason = %rejected.reason, "could not set");
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
