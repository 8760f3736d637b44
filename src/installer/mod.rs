//! npmctl installer
//!
//! This module handles:
//! - Locating the interpreter and resolving the install source
//! - Creating the runtime environment and installing the package into it
//! - Writing the launcher shim and reconciling the shell startup file
//! - Reporting whether the launcher is reachable from the current session
//!
//! ## Module Organization
//!
//! - `pipeline.rs`: the ordered [`InstallStep`]s
//! - `prerequisites.rs`: interpreter lookup
//! - `environment.rs`: venv creation and pip installs
//! - `launcher.rs`: launcher shim rendering and writing
//! - `status.rs`: PATH reachability check
//! - `runner.rs`: subprocess seam

pub mod environment;
pub mod launcher;
pub mod pipeline;
pub mod prerequisites;
pub mod runner;
pub mod status;


use std::path::PathBuf;

pub use pipeline::InstallStep;
pub use runner::{CommandRunner, SystemRunner};
pub use status::Reachability;

use crate::config::{InstallConfig, PACKAGE_NAME};
use crate::error::Result;
use crate::shell::{self, ShellConfigOutcome};
use crate::source::InstallSource;
use crate::ui::Reporter;

/// Result of a completed installer run
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub source: InstallSource,
    pub launcher: PathBuf,
    /// `None` for dry runs
    pub shell_config: Option<ShellConfigOutcome>,
    pub reachability: Reachability,
}

/// Runs the installation pipeline for one configuration
pub struct Installer<'a> {
    config: &'a InstallConfig,
    runner: &'a mut dyn CommandRunner,
    reporter: &'a mut dyn Reporter,
    dry_run: bool,
}

impl<'a> Installer<'a> {
    pub fn new(
        config: &'a InstallConfig,
        runner: &'a mut dyn CommandRunner,
        reporter: &'a mut dyn Reporter,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            runner,
            reporter,
            dry_run,
        }
    }

    /// Run every step in order, stopping at the first failure
    pub fn run(&mut self) -> Result<InstallOutcome> {
        self.begin(InstallStep::VerifyPrerequisites);
        let interpreter = prerequisites::find_program(
            &self.config.python,
            &self.config.search_path,
            &self.config.invocation_dir,
        )?;
        self.reporter
            .debug(&format!("Using interpreter {}", interpreter.display()));

        self.begin(InstallStep::ResolveSource);
        let source = InstallSource::resolve(self.config);
        self.reporter.info(&format!("Installing from {source}"));

        self.begin(InstallStep::ProvisionEnvironment);
        if self.dry_run {
            self.would(&format!(
                "create environment at {} with {}",
                self.config.env_dir().display(),
                interpreter.display()
            ));
        } else {
            environment::provision(self.config, &interpreter, self.runner, self.reporter)?;
            self.reporter.info(&format!(
                "Environment ready at {}",
                self.config.env_dir().display()
            ));
        }

        self.begin(InstallStep::InstallPackage);
        if self.dry_run {
            self.would(&format!("upgrade pip and install {PACKAGE_NAME} from {source}"));
        } else {
            environment::install_package(self.config, &source, self.runner, self.reporter)?;
            self.reporter.info(&format!("Installed {PACKAGE_NAME}"));
        }

        self.begin(InstallStep::CreateLauncher);
        let launcher_path = self.config.launcher_path();
        if self.dry_run {
            self.would(&format!("write launcher {}", launcher_path.display()));
        } else {
            launcher::write(&launcher_path, &self.config.env_executable())?;
            self.reporter
                .info(&format!("Launcher written to {}", launcher_path.display()));
        }

        self.begin(InstallStep::ReconcileShellConfig);
        let shell_config = self.reconcile_shell_config()?;

        self.begin(InstallStep::ReportStatus);
        let reachability = Reachability::check(&self.config.search_path, &self.config.bin_dir);
        self.report_status(reachability);

        Ok(InstallOutcome {
            source,
            launcher: launcher_path,
            shell_config,
            reachability,
        })
    }

    fn reconcile_shell_config(&mut self) -> Result<Option<ShellConfigOutcome>> {
        let rc_file = self.config.shell_config_file();
        let export_line = self.config.export_line();
        self.reporter.debug(&format!(
            "Shell '{}' uses {}",
            self.config.shell,
            rc_file.display()
        ));

        if self.dry_run {
            if shell::reconcile::contains_export_line(&rc_file, &export_line)? {
                self.reporter.info(&format!(
                    "PATH entry already present in {}",
                    rc_file.display()
                ));
            } else {
                self.would(&format!("append PATH entry to {}", rc_file.display()));
            }
            return Ok(None);
        }

        let outcome = shell::reconcile(&rc_file, &export_line)?;
        let message = match &outcome {
            ShellConfigOutcome::AlreadyPresent { .. } => "PATH entry already present in",
            ShellConfigOutcome::Appended { .. } => "Added PATH entry to",
        };
        self.reporter
            .info(&format!("{message} {}", outcome.path().display()));
        Ok(Some(outcome))
    }

    fn report_status(&mut self, reachability: Reachability) {
        match reachability {
            Reachability::Ready => self.reporter.info(&format!(
                "{PACKAGE_NAME} is ready: {} is already on your PATH",
                self.config.bin_dir.display()
            )),
            Reachability::NeedsRestart => {
                self.reporter.info(&format!(
                    "{} is not on your PATH yet. Restart your shell or run:",
                    self.config.bin_dir.display()
                ));
                self.reporter
                    .info(&format!("    {}", self.config.export_line()));
            }
        }
        self.reporter.info(&format!("Try: {PACKAGE_NAME} --help"));
    }

    fn begin(&mut self, step: InstallStep) {
        self.reporter
            .step(step.number(), InstallStep::ALL.len(), step.label());
        if self.dry_run && step.is_mutating() {
            self.reporter.debug(&format!("Dry run: '{step}' makes no changes"));
        }
    }

    fn would(&mut self, action: &str) {
        self.reporter.info(&format!("[DRY RUN] Would {action}"));
    }
}
