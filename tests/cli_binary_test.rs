//! Runs the compiled binary as a subprocess

use std::fs;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_create-roleauth");

#[test]
fn given_no_project_name_when_run_then_usage_on_stdout_and_exit_1() {
    // Arrange
    let cwd = TempDir::new().unwrap();

    // Act
    let output = Command::new(BIN)
        .current_dir(cwd.path())
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    // Assert
    let stdout = String::from_utf8(output.stdout).expect("invalid utf8 string");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Please provide a project name."), "stdout: {stdout}");
    assert!(stdout.contains("create-roleauth my-app"), "stdout: {stdout}");
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}

#[test]
fn given_completions_flag_when_run_then_script_on_stdout_and_exit_0() {
    let cwd = TempDir::new().unwrap();

    let output = Command::new(BIN)
        .args(["--completions", "bash"])
        .current_dir(cwd.path())
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8(output.stdout).expect("invalid utf8 string");
    assert!(output.status.success());
    assert!(stdout.contains("create-roleauth"));
    assert!(output.stderr.is_empty());
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}
