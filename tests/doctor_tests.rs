//! Doctor command integration tests

#![cfg(unix)]

mod common;

use predicates::prelude::*;

#[test]
fn test_doctor_before_install_fails() {
    let test_home = common::TestHome::new();

    test_home
        .cmd(Some("/bin/bash"))
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("npmctl installation doctor"))
        .stdout(predicate::str::contains("How to fix:"))
        .stderr(predicate::str::contains("ERROR: Doctor found 3 issue(s)"));
}

#[test]
fn test_doctor_after_install_passes() {
    let test_home = common::TestHome::new();
    let search_path = format!("{}:{}", test_home.search_path(), test_home.bin_dir().display());

    test_home
        .cmd(Some("/bin/bash"))
        .env("PATH", &search_path)
        .assert()
        .success();

    test_home
        .cmd(Some("/bin/bash"))
        .env("PATH", &search_path)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."));
}

#[test]
fn test_doctor_json_report() {
    let test_home = common::TestHome::new();
    test_home.cmd(Some("/bin/zsh")).assert().success();

    let output = test_home
        .cmd(Some("/bin/zsh"))
        .args(["doctor", "--json"])
        .output()
        .expect("doctor should run");

    // PATH is not updated in this process, so only warnings remain
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["shell"], "zsh");
    let statuses: Vec<&str> = report["checks"]
        .as_array()
        .expect("checks should be an array")
        .iter()
        .filter_map(|check| check["status"].as_str())
        .collect();
    assert!(!statuses.contains(&"fail"));
    assert!(statuses.contains(&"warn"));
}
