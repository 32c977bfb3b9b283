mod common;
use common::{dispatch_cmd, empty_dir, setup_config};
use predicates::prelude::*;

#[test]
fn test_resolve_dm_url() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:dm:scott/tiger@db:5236"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dialect: DM"))
        .stdout(predicate::str::contains("Driver:  dm.jdbc.driver.DmDriver"))
        .stdout(predicate::str::contains("jdbc:dm:scott/********@db:5236"))
        .stdout(predicate::str::contains("tiger").not());
}

#[test]
fn test_resolve_mysql_url_prefers_oceanbase() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:mysql://db/app"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dialect: OceanBase"))
        .stdout(predicate::str::contains("Driver:  com.mysql.cj.jdbc.Driver"))
        .stdout(predicate::str::contains("connectionAttributes = program_name:dialect-dispatch"));
}

#[test]
fn test_resolve_p6spy_url() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:p6spy:mysql://db/app"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Driver:  com.p6spy.engine.spy.P6SpyDriver"));
}

#[test]
fn test_resolve_product_overrides_url() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args([
            "resolve",
            "--url",
            "jdbc:mysql://db/app",
            "--product-name",
            "MySQL",
            "--product-version",
            "8.0.36",
        ])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dialect: MySQL (URL suggested OceanBase)"));
}

#[test]
fn test_resolve_secrets_manager_needs_upgrade() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc-secretsmanager:mysql://db/app"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("requires the Enterprise edition"));
}

#[test]
fn test_resolve_unknown_scheme() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:unknownscheme://x"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No dialect found to handle jdbc:unknownscheme://x"));
}

#[test]
fn test_resolve_uses_url_from_config() {
    let temp_dir = setup_config("[database]\nurl = \"jdbc:oceanbase://db:2881/app\"\n");

    dispatch_cmd()
        .arg("resolve")
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Driver:  com.oceanbase.jdbc.Driver"));
}

#[test]
fn test_resolve_without_url_fails() {
    let temp_dir = empty_dir();

    dispatch_cmd()
        .arg("resolve")
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("No JDBC URL provided"));
}

#[test]
fn test_resolve_falls_back_to_legacy_driver() {
    let temp_dir = setup_config("[drivers]\navailable = [\"com.alipay.oceanbase.jdbc.Driver\"]\n");

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:oceanbase://db:2881/app"])
        .current_dir(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Driver:  com.alipay.oceanbase.jdbc.Driver (backup)"));
}

#[test]
fn test_resolve_missing_driver_shows_guidance() {
    let temp_dir = setup_config("[drivers]\navailable = [\"dm.jdbc.driver.DmDriver\"]\n");

    dispatch_cmd()
        .args(["resolve", "--url", "jdbc:mysql://db/app"])
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to load driver 'com.mysql.cj.jdbc.Driver'"))
        .stdout(predicate::str::contains("https://dev.mysql.com/downloads/connector/j/"));
}
