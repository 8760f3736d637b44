//! Installation pipeline stages
//!
//! The installer is a fixed, linear sequence of steps. Each step must succeed
//! before the next one starts; the first failure aborts the run.

use std::fmt;

/// Installation pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    VerifyPrerequisites,
    ResolveSource,
    ProvisionEnvironment,
    InstallPackage,
    CreateLauncher,
    ReconcileShellConfig,
    ReportStatus,
}

impl InstallStep {
    pub const ALL: [InstallStep; 7] = [
        InstallStep::VerifyPrerequisites,
        InstallStep::ResolveSource,
        InstallStep::ProvisionEnvironment,
        InstallStep::InstallPackage,
        InstallStep::CreateLauncher,
        InstallStep::ReconcileShellConfig,
        InstallStep::ReportStatus,
    ];

    /// 1-based position in [`Self::ALL`]
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|step| *step == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            InstallStep::VerifyPrerequisites => "Verifying prerequisites",
            InstallStep::ResolveSource => "Resolving install source",
            InstallStep::ProvisionEnvironment => "Provisioning runtime environment",
            InstallStep::InstallPackage => "Installing package",
            InstallStep::CreateLauncher => "Creating launcher",
            InstallStep::ReconcileShellConfig => "Updating shell configuration",
            InstallStep::ReportStatus => "Checking PATH",
        }
    }

    /// Whether the step changes anything on disk
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            InstallStep::ProvisionEnvironment
                | InstallStep::InstallPackage
                | InstallStep::CreateLauncher
                | InstallStep::ReconcileShellConfig
        )
    }
}

impl fmt::Display for InstallStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
