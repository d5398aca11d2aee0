//! Command dispatch: run a parsed `Cli` against the services

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, SplitArgs};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    execute_with(cli, load_container)
}

/// Dispatch `cli`; `container` is only called by commands that need services.
pub fn execute_with<F>(cli: &Cli, container: F) -> CliResult<()>
where
    F: FnOnce() -> CliResult<ServiceContainer>,
{
    match &cli.command {
        Some(Commands::Split(args)) => cmd_split(&container()?, args),
        Some(Commands::Join { filename }) => cmd_join(&container()?, filename),
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => cmd_config_show(&container()?),
        Some(Commands::Config {
            command: ConfigCommands::Path,
        }) => cmd_config_path(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Build the real service container from layered settings.
pub fn load_container() -> CliResult<ServiceContainer> {
    let settings = Settings::load()?;
    debug!(?settings, "loaded settings");
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(container))]
fn cmd_split(container: &ServiceContainer, args: &SplitArgs) -> CliResult<()> {
    let strategy = args.strategy()?;
    let report = container.split_service.split(&args.filename, strategy)?;

    for part in &report.parts {
        output::action(
            "Created",
            &format!("{} ({} bytes)", part.path.display(), part.len),
        );
    }
    output::success(&format!(
        "Split {} ({} bytes) into {} parts",
        report.source.display(),
        report.source_len,
        report.parts.len()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_join(container: &ServiceContainer, filename: &Path) -> CliResult<()> {
    let report = container.join_service.join(filename)?;

    if report.parts.is_empty() {
        output::warning(&format!(
            "no parts found for {}, created empty file",
            filename.display()
        ));
    }
    output::success(&format!(
        "Joined {} parts into {} ({} bytes)",
        report.parts.len(),
        report.output.display(),
        report.total_len()
    ));
    Ok(())
}

fn cmd_config_show(container: &ServiceContainer) -> CliResult<()> {
    output::info(container.settings.to_toml()?.trim_end());
    Ok(())
}

fn cmd_config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::warning("no config directory available on this platform"),
    }
    Ok(())
}
