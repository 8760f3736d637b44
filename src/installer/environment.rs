//! Runtime environment provisioning and package installation
//!
//! The environment is a Python virtual environment at a fixed path under the
//! install root. It is recreated with `--clear` on every install, and pip then
//! installs the package into it from the resolved source.

use std::ffi::OsString;
use std::path::Path;

use crate::config::InstallConfig;
use crate::error::{InstallerError, Result};
use crate::source::InstallSource;
use crate::ui::Reporter;

use super::runner::CommandRunner;

/// Arguments that create (or recreate) the environment at `env_dir`
pub fn venv_args(env_dir: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-m"),
        OsString::from("venv"),
        OsString::from("--clear"),
        env_dir.as_os_str().to_os_string(),
    ]
}

/// Arguments for `python -m pip install --upgrade <target>`
pub fn pip_install_args(target: OsString) -> Vec<OsString> {
    vec![
        OsString::from("-m"),
        OsString::from("pip"),
        OsString::from("install"),
        OsString::from("--upgrade"),
        OsString::from("--disable-pip-version-check"),
        target,
    ]
}

/// Create the runtime environment with `interpreter`
pub fn provision(
    config: &InstallConfig,
    interpreter: &Path,
    runner: &mut dyn CommandRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let env_dir = config.env_dir();
    let creation_failed = |reason: String| InstallerError::EnvironmentCreation {
        path: env_dir.display().to_string(),
        reason,
    };

    std::fs::create_dir_all(&config.install_root).map_err(|e| {
        creation_failed(format!(
            "cannot create {}: {e}",
            config.install_root.display()
        ))
    })?;

    let args = venv_args(&env_dir);
    reporter.debug(&format!("Running {} {}", interpreter.display(), join(&args)));
    reporter.begin_task(&format!("Creating environment at {}", env_dir.display()));
    let result = runner.run(interpreter, &args);
    reporter.end_task();

    let program = interpreter.display().to_string();
    let output = result.map_err(|e| creation_failed(format!("could not run {program}: {e}")))?;
    if !output.success {
        return Err(creation_failed(output.failure_reason(&program)));
    }

    if !config.env_python().is_file() {
        return Err(creation_failed(format!(
            "{} was not created",
            config.env_python().display()
        )));
    }

    Ok(())
}

/// Upgrade pip, then install the package from `source` into the environment
pub fn install_package(
    config: &InstallConfig,
    source: &InstallSource,
    runner: &mut dyn CommandRunner,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let python = config.env_python();
    let install_failed = |reason: String| InstallerError::PackageInstall {
        source_desc: source.to_string(),
        reason,
    };

    let steps = [
        ("Upgrading pip", pip_install_args(OsString::from("pip"))),
        (
            "Installing npmctl",
            pip_install_args(source.pip_target()),
        ),
    ];

    for (task, args) in steps {
        reporter.debug(&format!("Running {} {}", python.display(), join(&args)));
        reporter.begin_task(task);
        let result = runner.run(&python, &args);
        reporter.end_task();

        let output = result.map_err(|e| install_failed(format!("could not run pip: {e}")))?;
        if !output.success {
            return Err(install_failed(output.failure_reason("pip")));
        }
    }

    let executable = config.env_executable();
    if !executable.is_file() {
        return Err(install_failed(format!(
            "package did not provide {}",
            executable.display()
        )));
    }

    Ok(())
}

fn join(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
