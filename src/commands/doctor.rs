//! Doctor command implementation

use crate::cli::DoctorArgs;
use crate::config::InstallConfig;
use crate::doctor::{self, DoctorReport, OsRelease};
use crate::error::{InstallerError, Result};

/// Run doctor command
pub fn run(config: &InstallConfig, args: &DoctorArgs) -> Result<()> {
    let os_release = OsRelease::load();
    let report = DoctorReport::collect(config, &os_release);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        doctor::print_report(&report, os_release.family());
    }

    match report.issues() {
        0 => Ok(()),
        issues => Err(InstallerError::DoctorFailed { issues }),
    }
}
