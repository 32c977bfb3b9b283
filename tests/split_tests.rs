mod common;
use common::{dispatch_cmd, empty_dir, setup_config};
use predicates::prelude::*;
use std::fs;

const DM_SCRIPT: &str = "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50));\n\
CREATE OR REPLACE PROCEDURE add_user(p_name VARCHAR) AS\n\
BEGIN\n\
  INSERT INTO users (name) VALUES (p_name);\n\
END;\n\
/\n\
SELECT COUNT(*) FROM users;\n";

#[test]
fn test_split_with_dialect() {
    let temp_dir = empty_dir();
    let script = temp_dir.path().join("V1__init.sql");
    fs::write(&script, DM_SCRIPT).unwrap();

    dispatch_cmd()
        .arg("split")
        .arg("--dialect")
        .arg("dm")
        .arg("--file")
        .arg(&script)
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("dialect DM"))
        .stdout(predicate::str::contains("--- statement 3"))
        .stdout(predicate::str::contains("✅ 3 statements"));
}

#[test]
fn test_split_batches_from_config() {
    let temp_dir = setup_config("[engine]\nbatch = true\n");
    let script = temp_dir.path().join("V2__data.sql");
    fs::write(&script, "INSERT INTO t VALUES (1);\nINSERT INTO t VALUES (2);\n").unwrap();

    dispatch_cmd()
        .arg("split")
        .arg("--url")
        .arg("jdbc:mysql://db/app")
        .arg("--file")
        .arg(&script)
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== batch of 2"));
}

#[test]
fn test_split_unknown_dialect() {
    let temp_dir = empty_dir();
    let script = temp_dir.path().join("V1__init.sql");
    fs::write(&script, "SELECT 1;").unwrap();

    dispatch_cmd()
        .arg("split")
        .arg("--dialect")
        .arg("sybase")
        .arg("--file")
        .arg(&script)
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown dialect: sybase"));
}

#[test]
fn test_split_missing_file() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["split", "--dialect", "mysql", "--file", "/nonexistent/script.sql"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read script"));
}
