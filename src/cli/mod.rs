//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - doctor: Doctor command arguments
//! - completions: Completions command arguments
//!
//! Install overrides ([`ConfigArgs`]) are global so that they apply to both
//! `install` and `doctor`, and to the bare invocation which defaults to `install`.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod doctor;
pub mod install;

pub use completions::CompletionsArgs;
pub use doctor::DoctorArgs;
pub use install::InstallArgs;

/// npmctl-install - installer for npmctl
///
/// Provision an isolated Python environment for npmctl and put a launcher on your PATH.
#[derive(Parser, Debug)]
#[command(
    name = "npmctl-install",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install npmctl into an isolated environment",
    long_about = "Installs npmctl, the Nginx Proxy Manager and Cloudflare command line helper, \
                  into an isolated Python environment, writes a launcher into a directory on \
                  your PATH and updates your shell startup file if needed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  npmctl-install                          \x1b[90m# Install from checkout or GitHub\x1b[0m\n   \
                  npmctl-install install --ref v1.2.0     \x1b[90m# Install a specific ref\x1b[0m\n   \
                  npmctl-install install --dry-run        \x1b[90m# Show what would happen\x1b[0m\n   \
                  npmctl-install doctor                   \x1b[90m# Check an existing installation\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true, env = "NPMCTL_INSTALL_VERBOSE")]
    pub verbose: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Installation overrides, each also readable from the environment
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Base directory for the runtime environment [default: ~/.local/share/npmctl]
    #[arg(long, global = true, value_name = "DIR", env = "NPMCTL_INSTALL_ROOT")]
    pub install_root: Option<PathBuf>,

    /// Directory for the npmctl launcher [default: ~/.local/bin]
    #[arg(long, global = true, value_name = "DIR", env = "NPMCTL_BIN_DIR")]
    pub bin_dir: Option<PathBuf>,

    /// GitHub repository to install from when not run inside a checkout
    #[arg(long, global = true, value_name = "OWNER/NAME", env = "NPMCTL_REPO")]
    pub repo: Option<String>,

    /// Branch or tag of the remote archive [default: main]
    #[arg(long = "ref", global = true, value_name = "REF", env = "NPMCTL_REF")]
    pub git_ref: Option<String>,

    /// Full URL of the source archive, overriding --repo and --ref
    #[arg(long, global = true, value_name = "URL", env = "NPMCTL_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Python interpreter used to create the environment [default: python3]
    #[arg(long, global = true, value_name = "PROGRAM", env = "NPMCTL_PYTHON")]
    pub python: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install or upgrade npmctl (default)
    Install(InstallArgs),

    /// Diagnose an existing installation
    Doctor(DoctorArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
