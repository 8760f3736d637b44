use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from the current checkout or GitHub:\n    npmctl-install install\n\n\
                   Install a tagged release:\n    npmctl-install install --ref v1.2.0\n\n\
                   Install from a mirror:\n    npmctl-install install --source-url https://mirror.example/npmctl.tar.gz\n\n\
                   Preview without changing anything:\n    npmctl-install install --dry-run")]
pub struct InstallArgs {
    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,
}
