//! Report formatting and printing utilities.
//!
//! Kept apart from the pipeline so spring-cleaning can be used as a library
//! without terminal output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, JobOutcome};
use crate::core::JobWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: written files and results to stdout, warnings
/// and errors to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for job in &result.jobs {
        print_job(job, &result.root_dir, verbose, out, err);
    }
    print_summary(result, out);
}

fn display_path(path: &Path, root_dir: &Path) -> String {
    path.strip_prefix(root_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn print_warning<E: Write>(warning: &JobWarning, err: &mut E) {
    let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), warning);
}

fn print_job<O: Write, E: Write>(
    job: &JobOutcome,
    root_dir: &Path,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &job.result {
        Ok(report) => {
            for warning in &report.warnings {
                if verbose || !warning.is_verbose_only() {
                    print_warning(warning, err);
                }
            }
            for path in &report.written {
                let _ = writeln!(
                    out,
                    "{} File \"{}\" created.",
                    SUCCESS_MARK.green(),
                    display_path(path, root_dir)
                );
            }
            if verbose {
                let _ = writeln!(
                    out,
                    "  {} {}: {} {}",
                    "-->".blue(),
                    job.name.cyan(),
                    report.keys,
                    if report.keys == 1 { "key" } else { "keys" }
                );
            }
        }
        Err(e) => {
            let _ = writeln!(
                err,
                "{} job \"{}\" failed: {}",
                "error:".bold().red(),
                job.name,
                e
            );
        }
    }
}

fn print_summary<O: Write>(result: &CommandResult, out: &mut O) {
    let total = result.jobs.len();
    let failed = result.failed_count();
    let noun = if total == 1 { "job" } else { "jobs" };

    let line = if failed == 0 {
        format!("{} {}", SUCCESS_MARK.green(), format!("Ran {} {}", total, noun).green())
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("Ran {} {}: {} failed", total, noun, failed).red()
        )
    };
    let _ = writeln!(out, "{}", line);
}
