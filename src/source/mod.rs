//! Install source resolution
//!
//! npmctl is installed either from the checkout the installer is run in, or
//! from a GitHub source archive:
//! - Local checkout: the invocation directory contains `pyproject.toml`
//! - Remote archive: `https://github.com/{repo}/archive/refs/heads/{ref}.tar.gz`,
//!   or the explicit source URL override when set
//!
//! Resolution only builds paths and URLs; nothing is fetched here.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{InstallConfig, MANIFEST_FILE};

/// Where the package is installed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// Directory containing the package manifest
    Local { path: PathBuf },
    /// Source archive URL for a branch or tag
    Remote { url: String },
}

impl InstallSource {
    /// Resolve the source for `config`
    ///
    /// A manifest in the invocation directory always wins over the remote settings.
    pub fn resolve(config: &InstallConfig) -> Self {
        if has_manifest(&config.invocation_dir) {
            let path = dunce::canonicalize(&config.invocation_dir)
                .unwrap_or_else(|_| config.invocation_dir.clone());
            return InstallSource::Local { path };
        }

        let url = config
            .source_url
            .clone()
            .unwrap_or_else(|| archive_url(&config.repository, &config.git_ref));
        InstallSource::Remote { url }
    }

    /// Check if this is a local checkout source
    pub fn is_local(&self) -> bool {
        matches!(self, InstallSource::Local { .. })
    }

    /// The requirement argument handed to pip
    pub fn pip_target(&self) -> OsString {
        match self {
            InstallSource::Local { path } => path.clone().into_os_string(),
            InstallSource::Remote { url } => OsString::from(url),
        }
    }
}

impl fmt::Display for InstallSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallSource::Local { path } => write!(f, "local checkout {}", path.display()),
            InstallSource::Remote { url } => write!(f, "remote archive {url}"),
        }
    }
}

/// Whether `dir` looks like a checkout of the package
pub fn has_manifest(dir: &Path) -> bool {
    dir.join(MANIFEST_FILE).is_file()
}

/// GitHub source archive URL for `repository` at `git_ref`
pub fn archive_url(repository: &str, git_ref: &str) -> String {
    format!(
        "https://github.com/{}/archive/refs/heads/{}.tar.gz",
        repository.trim_matches('/'),
        git_ref
    )
}
