//! Turning raw argument tokens into a command, or into usage output and an
//! exit code for `main` to act on.
//!
//! - no subcommand, `-h`, unknown subcommand: top-level help, exit 0
//! - `-V` / `--version`: version, exit 0
//! - `split -h`, `join --help`: subcommand help on stdout, exit 64
//! - any rejected subcommand invocation: error and usage on stderr, exit 64
//!
//! Only the first token after any leading `-d` flags selects a subcommand.
//! A rejected invocation prints clap's error message and the subcommand's
//! usage line to stderr rather than the full help; `split -h` shows that.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::cli::args::Cli;
use crate::exitcode;

/// Result of argument parsing.
#[derive(Debug)]
pub enum Parsed {
    /// Arguments are valid; run the command.
    Run(Cli),
    /// Print usage text and exit without running anything.
    Usage(Usage),
}

/// Text to print and the exit code to terminate with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub text: String,
    pub exit_code: i32,
    /// Print to stderr instead of stdout
    pub is_error: bool,
}

/// Parse `args` (including the program name) without exiting the process.
pub fn parse_args<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(args.iter()) {
        Ok(cli) if cli.command.is_none() => Parsed::Usage(top_level_usage()),
        Ok(cli) => Parsed::Run(cli),
        Err(err) => Parsed::Usage(usage_for(&err, &args)),
    }
}

fn top_level_usage() -> Usage {
    Usage {
        text: Cli::command().render_help().to_string(),
        exit_code: exitcode::OK,
        is_error: false,
    }
}

/// The subcommand named by the first token after the program name and any
/// leading debug flags. Later tokens never select a subcommand.
fn subcommand_name(args: &[OsString]) -> Option<String> {
    let first = args
        .iter()
        .skip(1)
        .find(|a| a.to_str().map_or(true, |s| !is_debug_flag(s)))?
        .to_str()?;
    Cli::command()
        .find_subcommand(first)
        .map(|sub| sub.get_name().to_string())
}

/// `-d`, `-dd`, ... or `--debug`
fn is_debug_flag(token: &str) -> bool {
    token == "--debug"
        || token
            .strip_prefix('-')
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'd'))
}

/// Usage line of a subcommand, e.g. `Usage: splitjoin join <FILENAME>`.
fn subcommand_usage(name: &str) -> Option<String> {
    let mut cmd = Cli::command();
    cmd.build();
    cmd.find_subcommand_mut(name)
        .map(|sub| sub.render_usage().to_string())
}

fn usage_for(err: &clap::Error, args: &[OsString]) -> Usage {
    let subcommand = subcommand_name(args);
    match err.kind() {
        ErrorKind::DisplayVersion => Usage {
            text: err.render().to_string(),
            exit_code: exitcode::OK,
            is_error: false,
        },
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => Usage {
            text: err.render().to_string(),
            exit_code: if subcommand.is_some() {
                exitcode::USAGE
            } else {
                exitcode::OK
            },
            is_error: false,
        },
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument if subcommand.is_none() => {
            top_level_usage()
        }
        _ => {
            let mut text = err.render().to_string();
            // value errors render without a usage line
            if !text.contains("Usage:") {
                if let Some(usage) = subcommand.as_deref().and_then(subcommand_usage) {
                    text = format!("{}\n{}", text.trim_end(), usage);
                }
            }
            Usage {
                text,
                exit_code: exitcode::USAGE,
                is_error: true,
            }
        }
    }
}
