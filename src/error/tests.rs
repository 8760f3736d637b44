//! Error type tests
//!
//! Tests for InstallerError messages, diagnostic codes and constructors.

#![allow(clippy::expect_used)]

use std::path::Path;

use miette::Diagnostic;

use crate::error::{InstallerError, fs, invalid_config};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_missing_dependency_display() {
    let err = InstallerError::MissingDependency {
        program: "python3".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Required program 'python3' was not found on PATH"
    );
}

#[test]
fn test_missing_dependency_code_and_help() {
    let err = InstallerError::MissingDependency {
        program: "python3".to_string(),
    };
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("npmctl_install::prereq::missing_dependency".to_string())
    );
    assert!(err.help().is_some());
}

test_error_contains!(
    test_environment_creation_error,
    InstallerError::EnvironmentCreation {
        path: "/opt/npmctl/venv".to_string(),
        reason: "permission denied".to_string(),
    },
    "/opt/npmctl/venv",
    "permission denied"
);

test_error_contains!(
    test_package_install_error,
    InstallerError::PackageInstall {
        source_desc: "remote archive https://example.com/a.tar.gz".to_string(),
        reason: "pip failed with exit status 1".to_string(),
    },
    "remote archive",
    "exit status 1"
);

test_error_contains!(
    test_doctor_failed_error,
    InstallerError::DoctorFailed { issues: 2 },
    "2 issue(s)"
);

#[test]
fn test_fs_io_failed_constructor() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = fs::io_failed(Path::new("/root/.bashrc"), "append", &io_err);
    assert!(matches!(err, InstallerError::Filesystem { .. }));
    assert!(err.to_string().contains("/root/.bashrc"));
    assert!(err.to_string().contains("append: denied"));
}

#[test]
fn test_invalid_config_constructor() {
    let err = invalid_config("repository must not be empty");
    assert!(matches!(err, InstallerError::InvalidConfiguration { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: repository must not be empty"
    );
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("not json");
    let json_err = parse_result.expect_err("should fail to parse");
    let err: InstallerError = json_err.into();
    assert!(matches!(err, InstallerError::OutputFailed { .. }));
}
