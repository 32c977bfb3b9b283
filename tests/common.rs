#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use tempfile::{TempDir, tempdir};

/// Returns a configured Command for `dialect-dispatch`
pub fn dispatch_cmd() -> Command {
    Command::cargo_bin("dialect-dispatch").expect("Binary not found")
}

/// Temp dir holding a `config.toml` with the given contents
pub fn setup_config(contents: &str) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("config.toml"), contents).expect("Failed to write config");
    temp_dir
}

/// Temp dir without any configuration file
pub fn empty_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}
