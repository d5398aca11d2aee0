//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand, ValueHint};

use crate::cli::error::{CliError, CliResult};
use crate::domain::SplitStrategy;

/// Split a file into numbered parts, or join the parts back together
#[derive(Parser, Debug)]
#[command(name = "splitjoin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split <FILENAME> into <FILENAME>.0, <FILENAME>.1, ...
    Split(SplitArgs),

    /// Join <FILENAME>.0, <FILENAME>.1, ... into <FILENAME>
    Join {
        /// Base filename: for "reg.avi.0", "reg.avi.1", ... pass "reg.avi"
        #[arg(value_hint = ValueHint::FilePath)]
        filename: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("mode").required(true).args(["size", "parts"])))]
pub struct SplitArgs {
    /// Size of each part in bytes (the last part may be smaller)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub size: Option<u64>,

    /// Number of parts to split <FILENAME> into
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub parts: Option<u64>,

    /// File to split
    #[arg(value_hint = ValueHint::FilePath)]
    pub filename: PathBuf,
}

impl SplitArgs {
    /// The split strategy selected by `--size` or `--parts`.
    pub fn strategy(&self) -> CliResult<SplitStrategy> {
        match (self.size, self.parts) {
            (Some(size), None) => Ok(SplitStrategy::Size(size)),
            (None, Some(parts)) => Ok(SplitStrategy::Parts(parts)),
            _ => Err(CliError::InvalidArgs(
                "exactly one of --size or --parts is required".to_string(),
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,

    /// Show config file path
    Path,
}
