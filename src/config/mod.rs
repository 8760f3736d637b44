//! Installer configuration
//!
//! Configuration is resolved once in `main` from two inputs:
//! - [`ConfigArgs`]: flags and their `NPMCTL_*` environment fallbacks, read by clap
//! - [`HostEnvironment`]: a snapshot of home, shell, PATH and working directory
//!
//! Everything downstream receives the resulting [`InstallConfig`] and never
//! consults process-wide state, which keeps the installer testable.


use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::ConfigArgs;
use crate::error::{InstallerError, Result, fs, invalid_config};
use crate::shell::{self, ShellKind};

/// Name of the installed package and of its console script
pub const PACKAGE_NAME: &str = "npmctl";

/// File whose presence marks a local checkout
pub const MANIFEST_FILE: &str = "pyproject.toml";

pub const DEFAULT_REPOSITORY: &str = "npmctl/npmctl";
pub const DEFAULT_REF: &str = "main";
pub const DEFAULT_PYTHON: &str = "python3";

/// Runtime environment directory inside the install root
const ENV_DIR_NAME: &str = "venv";

/// Values captured from the running process
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment {
    pub home: Option<PathBuf>,
    pub shell: Option<String>,
    pub search_path: Option<OsString>,
    pub current_dir: PathBuf,
}

impl HostEnvironment {
    /// Snapshot the current process environment
    pub fn capture() -> Result<Self> {
        let current_dir = std::env::current_dir()
            .map_err(|e| fs::io_failed(Path::new("."), "resolve current directory", &e))?;

        Ok(Self {
            home: dirs::home_dir(),
            shell: std::env::var("SHELL").ok(),
            search_path: std::env::var_os("PATH"),
            current_dir,
        })
    }
}

/// Fully resolved installer configuration
#[derive(Debug, Clone)]
pub struct InstallConfig {
    pub install_root: PathBuf,
    pub bin_dir: PathBuf,
    pub repository: String,
    pub git_ref: String,
    pub source_url: Option<String>,
    pub python: String,
    pub home: PathBuf,
    pub shell: ShellKind,
    pub search_path: OsString,
    pub invocation_dir: PathBuf,
}

impl InstallConfig {
    /// Apply defaults to `args` using the captured `host` values
    pub fn resolve(args: &ConfigArgs, host: &HostEnvironment) -> Result<Self> {
        let home = host
            .home
            .clone()
            .filter(|home| !home.as_os_str().is_empty())
            .ok_or(InstallerError::HomeDirectoryNotFound)?;

        let install_root = match &args.install_root {
            Some(root) => absolutize(&host.current_dir, root),
            None => home.join(".local").join("share").join(PACKAGE_NAME),
        };
        let bin_dir = match &args.bin_dir {
            Some(dir) => absolutize(&host.current_dir, dir),
            None => home.join(".local").join("bin"),
        };
        require_utf8("install root", &install_root)?;
        require_utf8("launcher directory", &bin_dir)?;

        let repository = non_empty("repository", args.repo.as_deref(), DEFAULT_REPOSITORY)?;
        let git_ref = non_empty("ref", args.git_ref.as_deref(), DEFAULT_REF)?;
        let python = non_empty("python", args.python.as_deref(), DEFAULT_PYTHON)?;

        let source_url = match args.source_url.as_deref().map(str::trim) {
            Some("") => return Err(invalid_config("source URL override must not be empty")),
            Some(url) => Some(url.to_string()),
            None => None,
        };

        Ok(Self {
            install_root,
            bin_dir,
            repository,
            git_ref,
            source_url,
            python,
            home,
            shell: ShellKind::detect(host.shell.as_deref()),
            search_path: host.search_path.clone().unwrap_or_default(),
            invocation_dir: host.current_dir.clone(),
        })
    }

    /// Directory of the isolated runtime environment
    pub fn env_dir(&self) -> PathBuf {
        self.install_root.join(ENV_DIR_NAME)
    }

    /// Script directory inside the runtime environment
    pub fn env_bin_dir(&self) -> PathBuf {
        self.env_dir().join("bin")
    }

    /// Interpreter inside the runtime environment
    pub fn env_python(&self) -> PathBuf {
        self.env_bin_dir().join("python")
    }

    /// The installed console script the launcher forwards to
    pub fn env_executable(&self) -> PathBuf {
        self.env_bin_dir().join(PACKAGE_NAME)
    }

    /// Where the launcher shim is written
    pub fn launcher_path(&self) -> PathBuf {
        self.bin_dir.join(PACKAGE_NAME)
    }

    /// Startup file for the detected shell
    pub fn shell_config_file(&self) -> PathBuf {
        self.shell.rc_file(&self.home)
    }

    /// PATH export line for [`Self::bin_dir`]
    pub fn export_line(&self) -> String {
        shell::export_line(&self.bin_dir)
    }
}

fn non_empty(name: &str, value: Option<&str>, default: &str) -> Result<String> {
    match value.map(str::trim) {
        Some("") => Err(invalid_config(format!("{name} override must not be empty"))),
        Some(value) => Ok(value.to_string()),
        None => Ok(default.to_string()),
    }
}

/// The launcher and export line embed these paths as text
fn require_utf8(name: &str, path: &Path) -> Result<()> {
    if path.to_str().is_none() {
        return Err(invalid_config(format!(
            "{name} {} is not valid UTF-8",
            path.display()
        )));
    }
    Ok(())
}

/// Launcher and export line must carry absolute paths
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
