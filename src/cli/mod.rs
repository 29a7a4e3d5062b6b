//! Command-line interface layer.
//!
//! Parses arguments, turns them into pipeline jobs and reports results.
//! The pipeline itself lives in [`crate::core`] so the crate can be used as a
//! library without any of the terminal output.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
