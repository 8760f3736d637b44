//! CLI integration tests using the REAL npmctl-install binary

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn installer_cmd() -> Command {
    Command::cargo_bin("npmctl-install").unwrap()
}

#[test]
fn test_help_output() {
    installer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("--install-root"))
        .stdout(predicate::str::contains("NPMCTL_BIN_DIR"));
}

#[test]
fn test_version_output() {
    installer_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("npmctl-install"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    installer_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npmctl-install"));
}

#[test]
fn test_completions_unknown_shell() {
    installer_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: "));
}

#[test]
fn test_unknown_subcommand() {
    installer_cmd().arg("frobnicate").assert().failure();
}
