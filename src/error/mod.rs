//! Error types and handling for the installer
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes and help text.
//!
//! File system failures carry the offending path; see [`fs`] for constructors.

pub mod fs;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Prerequisite errors
    #[error("Required program '{program}' was not found on PATH")]
    #[diagnostic(
        code(npmctl_install::prereq::missing_dependency),
        help("Install Python 3 (with the venv module) or point --python / NPMCTL_PYTHON at an interpreter")
    )]
    MissingDependency { program: String },

    // Environment errors
    #[error("Failed to create runtime environment at {path}: {reason}")]
    #[diagnostic(
        code(npmctl_install::environment::creation_failed),
        help("Check that the install root is writable and that the interpreter ships the venv module")
    )]
    EnvironmentCreation { path: String, reason: String },

    // Package errors
    #[error("Failed to install package from {source_desc}: {reason}")]
    #[diagnostic(
        code(npmctl_install::package::install_failed),
        help("Check your network connection and the source URL, then rerun the installer")
    )]
    PackageInstall { source_desc: String, reason: String },

    // File system errors
    #[error("File system error at {path}: {reason}")]
    #[diagnostic(code(npmctl_install::fs::failed))]
    Filesystem { path: String, reason: String },

    // Configuration errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(npmctl_install::config::no_home),
        help("Set HOME so the installer can locate your shell startup files")
    )]
    HomeDirectoryNotFound,

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(npmctl_install::config::invalid))]
    InvalidConfiguration { message: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(npmctl_install::output::render_failed))]
    OutputFailed { message: String },

    // Doctor errors
    #[error("Doctor found {issues} issue(s)")]
    #[diagnostic(
        code(npmctl_install::doctor::failed),
        help("Rerun 'npmctl-install' to repair the installation")
    )]
    DoctorFailed { issues: usize },
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::OutputFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;

/// Creates an invalid configuration error
pub fn invalid_config(message: impl Into<String>) -> InstallerError {
    InstallerError::InvalidConfiguration {
        message: message.into(),
    }
}
