//! Tests for command dispatch: from a parsed `Cli` to an outcome and exit code

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use splitjoin::cli::commands::{execute_command, execute_with};
use splitjoin::cli::{parse_args, Cli, CliResult, Parsed};
use splitjoin::config::Settings;
use splitjoin::exitcode;
use splitjoin::infrastructure::ServiceContainer;
use splitjoin::util::testing::{init_test_setup, write_file};

#[ctor::ctor]
fn init() {
    init_test_setup();
}

fn cli(args: &[&str]) -> Cli {
    match parse_args(args.iter().copied()) {
        Parsed::Run(cli) => cli,
        Parsed::Usage(u) => panic!("expected a command, got usage: {}", u.text),
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

fn run(args: &[&str]) -> CliResult<()> {
    execute_with(&cli(args), || {
        Ok(ServiceContainer::new(Settings { buffer_size: 3 }))
    })
}

#[test]
fn given_split_then_join_when_dispatched_then_file_restored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let source = write_file(temp.path(), "movie.avi", b"0123456789");
    let joined = temp.path().join("copy.avi");

    // Act
    run(&["splitjoin", "split", "-p", "3", path_arg(&source)]).unwrap();
    for i in 0..3 {
        fs::rename(
            temp.path().join(format!("movie.avi.{i}")),
            temp.path().join(format!("copy.avi.{i}")),
        )
        .unwrap();
    }
    run(&["splitjoin", "join", path_arg(&joined)]).unwrap();

    // Assert
    assert_eq!(fs::read(&joined).unwrap(), b"0123456789");
}

#[test]
fn given_existing_parts_when_split_again_then_exit_73_and_parts_kept() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let source = write_file(temp.path(), "movie.avi", b"0123456789");
    run(&["splitjoin", "split", "--size=4", path_arg(&source)]).unwrap();

    // Act
    let err = run(&["splitjoin", "split", "--parts=2", path_arg(&source)]).unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::CANTCREAT);
    assert_eq!(fs::read(temp.path().join("movie.avi.0")).unwrap(), b"0123");
    assert_eq!(fs::read(temp.path().join("movie.avi.2")).unwrap(), b"89");
}

#[test]
fn given_missing_source_when_split_then_exit_66() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("absent.avi");

    let err = run(&["splitjoin", "split", "-s", "4", path_arg(&source)]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert!(!temp.path().join("absent.avi.0").exists());
}

#[test]
fn given_existing_output_when_join_then_exit_73() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "reg.avi.0", b"part");
    let base = write_file(temp.path(), "reg.avi", b"keep");

    let err = run(&["splitjoin", "join", path_arg(&base)]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CANTCREAT);
    assert_eq!(fs::read(&base).unwrap(), b"keep");
}

#[test]
fn given_no_parts_when_join_then_succeeds_with_empty_file() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("reg.avi");

    run(&["splitjoin", "join", path_arg(&base)]).unwrap();

    assert_eq!(fs::read(&base).unwrap(), b"");
}

#[test]
fn given_invalid_config_when_split_then_exit_78_and_nothing_written() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "splitjoin.toml", b"buffer_size = 0\n");
    let source = write_file(temp.path(), "movie.avi", b"0123456789");
    let cli = cli(&["splitjoin", "split", "-p", "2", path_arg(&source)]);

    // Act
    let err = execute_with(&cli, || {
        Ok(ServiceContainer::new(Settings::load_from(Some(&config))?))
    })
    .unwrap_err();

    // Assert
    assert_eq!(err.exit_code(), exitcode::CONFIG);
    assert!(!temp.path().join("movie.avi.0").exists());
}

#[test]
fn given_config_show_when_dispatched_then_succeeds() {
    assert!(run(&["splitjoin", "config", "show"]).is_ok());
}

#[test]
fn given_commands_without_services_when_dispatched_then_container_not_built() {
    for args in [
        &["splitjoin", "config", "path"][..],
        &["splitjoin", "completion", "bash"][..],
    ] {
        let result = execute_with(&cli(args), || panic!("container built for {args:?}"));
        assert!(result.is_ok(), "{args:?}");
    }
}

#[test]
fn given_config_path_when_executed_then_succeeds() {
    assert!(execute_command(&cli(&["splitjoin", "config", "path"])).is_ok());
}
