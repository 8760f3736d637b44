//! Shell detection and startup file reconciliation
//!
//! The user's shell is classified into a small closed set of [`ShellKind`]s from
//! the `SHELL` value captured at startup. Each kind maps to exactly one startup
//! file under the home directory, which [`reconcile`] appends the PATH export to.

pub mod reconcile;

pub use reconcile::{ShellConfigOutcome, reconcile};

use std::fmt;
use std::path::{Path, PathBuf};

/// Marker comment written above the PATH export line
pub const MARKER_COMMENT: &str = "# Added by npmctl installer";

/// Shells whose startup file is known, plus a generic fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    Bash,
    Zsh,
    /// Unknown or unset shell; uses the generic POSIX profile
    Other,
}

impl ShellKind {
    /// Classify a `SHELL` value such as `/usr/bin/zsh`
    ///
    /// Only the final path component is considered, so `/bin/bash` and `bash`
    /// are equivalent. Empty and unknown values yield [`ShellKind::Other`].
    pub fn detect(shell: Option<&str>) -> Self {
        let Some(shell) = shell else {
            return ShellKind::Other;
        };

        let name = Path::new(shell.trim())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        match name {
            "bash" => ShellKind::Bash,
            "zsh" => ShellKind::Zsh,
            _ => ShellKind::Other,
        }
    }

    /// Startup file name relative to the home directory
    pub fn rc_file_name(self) -> &'static str {
        match self {
            ShellKind::Bash => ".bashrc",
            ShellKind::Zsh => ".zshrc",
            ShellKind::Other => ".profile",
        }
    }

    /// Startup file for this shell under `home`
    pub fn rc_file(self, home: &Path) -> PathBuf {
        home.join(self.rc_file_name())
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// The line that puts `bin_dir` in front of PATH
pub fn export_line(bin_dir: &Path) -> String {
    format!(
        "export PATH=\"{}:$PATH\"",
        escape_double_quoted(&bin_dir.display().to_string())
    )
}

/// Escape `value` for use inside a double-quoted POSIX shell word
pub fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
