//! UI/Progress presentation layer
//!
//! This module handles:
//! - Tagged status lines on stdout for each installer step
//! - A spinner on stderr while a subprocess runs
//! - Dimmed debug lines on stderr in verbose mode
//!
//! All output goes through the [`Reporter`] trait, so the installer can run
//! silently in tests.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Prefix of every status line
pub const TOOL_TAG: &str = "[npmctl-install]";

/// Reporter for installer progress
pub trait Reporter {
    /// A pipeline step is starting
    fn step(&mut self, index: usize, total: usize, label: &str);

    /// Informational status line
    fn info(&mut self, message: &str);

    /// Detail shown only in verbose mode
    fn debug(&mut self, message: &str);

    /// A long-running task started
    fn begin_task(&mut self, message: &str);

    /// The current long-running task ended
    fn end_task(&mut self);
}

/// Terminal reporter with styled output and spinners
pub struct ConsoleReporter {
    verbose: bool,
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: None,
        }
    }

    fn tag() -> console::StyledObject<&'static str> {
        style(TOOL_TAG).cyan().bold()
    }
}

impl Reporter for ConsoleReporter {
    fn step(&mut self, index: usize, total: usize, label: &str) {
        println!(
            "{} {} {}",
            Self::tag(),
            style(format!("[{index}/{total}]")).dim(),
            style(label).bold()
        );
    }

    fn info(&mut self, message: &str) {
        println!("{} {}", Self::tag(), message);
    }

    fn debug(&mut self, message: &str) {
        if self.verbose {
            eprintln!("{}", style(format!("[debug] {message}")).dim());
        }
    }

    fn begin_task(&mut self, message: &str) {
        self.end_task();
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn end_task(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.end_task();
    }
}

/// Silent reporter for tests
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&mut self, _index: usize, _total: usize, _label: &str) {}

    fn info(&mut self, _message: &str) {}

    fn debug(&mut self, _message: &str) {}

    fn begin_task(&mut self, _message: &str) {}

    fn end_task(&mut self) {}
}
