mod common;
use common::dispatch_cmd;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn test_config_generation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("test-config.toml");

    dispatch_cmd()
        .arg("config")
        .arg("--output")
        .arg(&config_path)
        .current_dir(&temp_dir)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[engine]"));
    assert!(content.contains("[drivers]"));
}

#[test]
#[serial]
fn test_config_generation_with_env() {
    let temp_dir = tempdir().unwrap();

    dispatch_cmd()
        .arg("config")
        .arg("--env")
        .arg("test")
        .current_dir(&temp_dir)
        .assert()
        .success();

    assert!(temp_dir.path().join("config.toml").exists());
    assert!(temp_dir.path().join("config/test.toml").exists());
}

#[test]
#[serial]
fn test_invalid_config_fails() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "invalid toml [[[").unwrap();

    dispatch_cmd()
        .arg("dialects")
        .current_dir(&temp_dir)
        .assert()
        .failure();
}

#[test]
#[serial]
fn test_environment_overlay() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("config")).unwrap();
    fs::write(
        temp_dir.path().join("config/staging.toml"),
        "[database]\nurl = \"jdbc:dm://staging:5236\"\n",
    )
    .unwrap();

    dispatch_cmd()
        .args(["--env", "staging", "resolve"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dialect: DM"));
}
