use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every job completed
/// - `Failure` (1): at least one job failed; the others still ran
/// - `Error` (2): the command could not run (config error, bad arguments, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every job completed.
    Success,
    /// At least one job failed.
    Failure,
    /// Command failed before running any job.
    Error,
}

impl ExitStatus {
    /// Status after running jobs, `failed` of which returned an error.
    pub fn for_failed_jobs(failed: usize) -> Self {
        if failed == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
