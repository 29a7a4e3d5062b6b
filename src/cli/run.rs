use anyhow::Result;

use super::{
    ExitStatus,
    args::{Arguments, Command},
    commands::{extract::extract, init::init, run::run as run_jobs},
    report,
};

/// Dispatch to the command handler and report its result.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let result = match args.command {
        Some(Command::Run(cmd)) => run_jobs(cmd)?,
        Some(Command::Extract(cmd)) => extract(cmd)?,
        Some(Command::Init) => return init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };

    report::print(&result, verbose);
    Ok(result.exit_status())
}
