//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `run`: Run the jobs defined in `.springrc.json`
//! - `extract`: Run a single ad-hoc job from command-line options
//! - `init`: Write a default `.springrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::generate::Action;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Run(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by job-running commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; config lookup and relative paths start here
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RunCommand {
    /// Jobs to run (default: all configured jobs)
    pub jobs: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source files, directories or glob patterns (prefix with ! to exclude)
    #[arg(required = true)]
    pub src: Vec<String>,

    /// Output file (output directory for gen_prop_list)
    #[arg(long)]
    pub dest: PathBuf,

    /// list_props, norm_props, spring_props or gen_prop_list
    #[arg(long, default_value_t = Action::ListProps)]
    pub action: Action,

    /// Base stem of the translation files, e.g. src/i18n/messages
    #[arg(long)]
    pub translation_file: Option<String>,

    /// Expected key namespace; can be given multiple times
    #[arg(long = "namespace")]
    pub namespaces: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the jobs defined in .springrc.json
    Run(RunCommand),
    /// Extract i18n properties from the given sources without a config file
    Extract(ExtractCommand),
    /// Initialize a new .springrc.json configuration file
    Init,
}
