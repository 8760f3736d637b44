//! npmctl-install - installer for npmctl
//!
//! Installs the npmctl command line tool into an isolated Python environment,
//! writes a launcher into a directory on PATH and keeps the user's shell
//! startup file pointing at it. Every step is safe to rerun.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod doctor;
mod error;
mod installer;
mod shell;
mod source;
mod ui;

use cli::{Cli, Commands, InstallArgs};
use config::{HostEnvironment, InstallConfig};
use error::{InstallerError, Result};

fn resolve_config(cli: &Cli) -> Result<InstallConfig> {
    let host = HostEnvironment::capture()?;
    InstallConfig::resolve(&cli.config, &host)
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        None => commands::install::run(&resolve_config(&cli)?, &InstallArgs::default(), cli.verbose),
        Some(Commands::Install(args)) => {
            commands::install::run(&resolve_config(&cli)?, args, cli.verbose)
        }
        Some(Commands::Doctor(args)) => commands::doctor::run(&resolve_config(&cli)?, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    }
}

fn report_error(err: &InstallerError, verbose: bool) {
    eprintln!("ERROR: {err}");
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
    if verbose {
        if let Some(code) = err.code() {
            eprintln!("  code: {code}");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        report_error(&e, verbose);
        std::process::exit(1);
    }
}
