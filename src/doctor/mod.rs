//! Installation diagnostics
//!
//! Inspects an existing installation for the resolved configuration without
//! changing anything. Failures are things a rerun of the installer repairs;
//! warnings only need the user's shell to pick up the new PATH.

pub mod os_release;

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::config::{InstallConfig, PACKAGE_NAME};
use crate::installer::{Reachability, launcher, prerequisites};
use crate::shell::{ShellKind, reconcile::contains_export_line};

pub use os_release::{DistroFamily, OsRelease};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub status: CheckStatus,
    pub detail: String,
}

impl Check {
    fn new(name: &'static str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name,
            status,
            detail: detail.into(),
        }
    }

    /// Pass when `ok`, otherwise `failure`
    fn pass_if(
        name: &'static str,
        ok: bool,
        failure: CheckStatus,
        detail: impl Into<String>,
    ) -> Self {
        let status = if ok { CheckStatus::Pass } else { failure };
        Self::new(name, status, detail)
    }
}

/// Everything `doctor` found
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distro: Option<String>,
    pub shell: ShellKind,
    pub install_root: PathBuf,
    pub launcher: PathBuf,
    pub checks: Vec<Check>,
}

impl DoctorReport {
    pub fn collect(config: &InstallConfig, os_release: &OsRelease) -> Self {
        let distro = Some(os_release.label()).filter(|label| !label.is_empty());

        Self {
            platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            distro,
            shell: config.shell,
            install_root: config.install_root.clone(),
            launcher: config.launcher_path(),
            checks: run_checks(config),
        }
    }

    /// Number of failed checks
    pub fn issues(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == CheckStatus::Fail)
            .count()
    }
}

fn run_checks(config: &InstallConfig) -> Vec<Check> {
    let mut checks = Vec::new();

    let interpreter = prerequisites::find_program(
        &config.python,
        &config.search_path,
        &config.invocation_dir,
    );
    checks.push(match interpreter {
        Ok(path) => Check::new("interpreter", CheckStatus::Pass, path.display().to_string()),
        Err(err) => Check::new("interpreter", CheckStatus::Fail, err.to_string()),
    });

    let env_python = config.env_python();
    checks.push(Check::pass_if(
        "environment",
        env_python.is_file(),
        CheckStatus::Fail,
        env_python.display().to_string(),
    ));

    let executable = config.env_executable();
    checks.push(Check::pass_if(
        "package",
        executable.is_file(),
        CheckStatus::Fail,
        executable.display().to_string(),
    ));

    let launcher_path = config.launcher_path();
    let launcher_detail = if launcher_path.exists() {
        format!("{} -> {}", launcher_path.display(), executable.display())
    } else {
        format!("{} is missing", launcher_path.display())
    };
    checks.push(Check::pass_if(
        "launcher",
        launcher::is_current(&launcher_path, &executable),
        CheckStatus::Fail,
        launcher_detail,
    ));

    let rc_file = config.shell_config_file();
    checks.push(
        match contains_export_line(&rc_file, &config.export_line()) {
            Ok(present) => Check::pass_if(
                "shell config",
                present,
                CheckStatus::Warn,
                rc_file.display().to_string(),
            ),
            Err(err) => Check::new("shell config", CheckStatus::Warn, err.to_string()),
        },
    );

    let reachability = Reachability::check(&config.search_path, &config.bin_dir);
    checks.push(Check::pass_if(
        "PATH",
        reachability == Reachability::Ready,
        CheckStatus::Warn,
        config.bin_dir.display().to_string(),
    ));

    checks
}

/// Print `report` for humans
pub fn print_report(report: &DoctorReport, family: DistroFamily) {
    let bold = Style::new().bold();
    println!(
        "{}",
        Style::new()
            .cyan()
            .bold()
            .apply_to(format!("{PACKAGE_NAME} installation doctor"))
    );
    println!("{} {}", bold.apply_to("Platform:"), report.platform);
    if let Some(distro) = &report.distro {
        println!("{} {}", bold.apply_to("Linux distro:"), distro);
    }
    println!("{} {}", bold.apply_to("Shell:"), report.shell);
    println!();

    for check in &report.checks {
        let (mark, style) = match check.status {
            CheckStatus::Pass => ("✔", Style::new().green()),
            CheckStatus::Warn => ("!", Style::new().yellow()),
            CheckStatus::Fail => ("✘", Style::new().red()),
        };
        println!(
            "{} {:<13} {}",
            style.apply_to(mark),
            check.name,
            Style::new().dim().apply_to(&check.detail)
        );
    }

    if report.issues() == 0 {
        println!();
        println!("{}", Style::new().green().bold().apply_to("All checks passed."));
        return;
    }

    println!();
    println!("{}", Style::new().yellow().bold().apply_to("How to fix:"));
    let interpreter_missing = report
        .checks
        .iter()
        .any(|check| check.name == "interpreter" && check.status == CheckStatus::Fail);
    if interpreter_missing {
        println!("  {}", family.python_install_hint());
    }
    println!("  Rerun npmctl-install to recreate the environment and launcher.");
}
