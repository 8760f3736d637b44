//! Install command implementation
//!
//! Runs the installer pipeline with the real subprocess runner and a console
//! reporter. Any step failure is returned unchanged to `main`.

use crate::cli::InstallArgs;
use crate::config::InstallConfig;
use crate::error::Result;
use crate::installer::{Installer, SystemRunner};
use crate::ui::{ConsoleReporter, Reporter};

/// Run install command
pub fn run(config: &InstallConfig, args: &InstallArgs, verbose: bool) -> Result<()> {
    let mut reporter = ConsoleReporter::new(verbose);
    let mut runner = SystemRunner;

    reporter.debug(&format!("Install root: {}", config.install_root.display()));
    reporter.debug(&format!("Launcher directory: {}", config.bin_dir.display()));

    let outcome = Installer::new(config, &mut runner, &mut reporter, args.dry_run).run()?;
    let origin = if outcome.source.is_local() { "checkout" } else { "archive" };
    reporter.debug(&format!(
        "Installed from {origin} ({}) with launcher {} ({:?})",
        outcome.source,
        outcome.launcher.display(),
        outcome.reachability
    ));
    if let Some(shell_config) = &outcome.shell_config {
        reporter.debug(&format!("Shell configuration: {shell_config:?}"));
    }

    Ok(())
}
