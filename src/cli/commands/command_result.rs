use std::path::PathBuf;

use crate::cli::ExitStatus;
use crate::core::{Job, JobReport, run_jobs};
use crate::error::Error;

/// Outcome of one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub name: String,
    pub result: Result<JobReport, Error>,
}

/// Result of running jobs
#[derive(Debug)]
pub struct CommandResult {
    /// Project root, used to shorten paths in output.
    pub root_dir: PathBuf,
    /// Outcomes in job order.
    pub jobs: Vec<JobOutcome>,
}

impl CommandResult {
    /// Run `jobs` and collect their outcomes.
    pub fn from_jobs(root_dir: PathBuf, jobs: &[Job]) -> Self {
        let outcomes = jobs
            .iter()
            .zip(run_jobs(jobs))
            .map(|(job, result)| JobOutcome {
                name: job.name.clone(),
                result,
            })
            .collect();
        Self {
            root_dir,
            jobs: outcomes,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.jobs.iter().filter(|job| job.result.is_err()).count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::for_failed_jobs(self.failed_count())
    }
}
