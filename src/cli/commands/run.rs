use std::path::PathBuf;

use anyhow::Result;

use super::CommandResult;
use crate::cli::args::RunCommand;
use crate::config::load_config;

/// Run configured jobs, all of them unless some are named.
pub fn run(cmd: RunCommand) -> Result<CommandResult> {
    let start_dir = cmd
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let loaded = load_config(&start_dir)?;
    let jobs = loaded.config.jobs(&loaded.root_dir, &cmd.jobs)?;

    Ok(CommandResult::from_jobs(loaded.root_dir, &jobs))
}
