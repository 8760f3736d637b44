use clap::Parser;

/// Arguments for the doctor command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the default installation:\n    npmctl-install doctor\n\n\
                  Check a custom location:\n    npmctl-install doctor --install-root /opt/npmctl\n\n\
                  Machine readable report:\n    npmctl-install doctor --json")]
pub struct DoctorArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
