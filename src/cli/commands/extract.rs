use std::path::PathBuf;

use anyhow::Result;

use super::CommandResult;
use crate::cli::args::ExtractCommand;
use crate::core::pipeline::{Job, ResolvedOptions, resolve_path};

/// Job name used for ad-hoc `extract` runs.
pub const EXTRACT_JOB_NAME: &str = "extract";

pub fn job_from_args(cmd: &ExtractCommand) -> Job {
    let root_dir = cmd
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    Job {
        name: EXTRACT_JOB_NAME.to_string(),
        sources: cmd.src.clone(),
        dest: resolve_path(&root_dir, &cmd.dest),
        options: ResolvedOptions {
            action: cmd.action.to_string(),
            translation_file: cmd
                .translation_file
                .as_ref()
                .map(|stem| resolve_path(&root_dir, stem)),
            namespaces: cmd.namespaces.clone(),
        },
        base_dir: root_dir,
    }
}

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let job = job_from_args(&cmd);
    Ok(CommandResult::from_jobs(job.base_dir.clone(), &[job]))
}
