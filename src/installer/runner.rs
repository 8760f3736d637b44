//! Subprocess execution
//!
//! The installer shells out to the interpreter and to pip. Commands go through
//! [`CommandRunner`] so the pipeline can be exercised without spawning anything.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Number of trailing stderr lines kept in a failure reason
const STDERR_TAIL_LINES: usize = 3;

/// Result of a finished command
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    pub stderr: String,
}

impl CommandOutput {
    #[cfg(test)]
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    /// Describe why the command failed, folding in the tail of stderr
    pub fn failure_reason(&self, program: &str) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };

        let tail = stderr_tail(&self.stderr);
        if tail.is_empty() {
            format!("{program} failed with {status}")
        } else {
            format!("{program} failed with {status}: {tail}")
        }
    }
}

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run `program` with `args`, waiting for it to exit
    ///
    /// An `Err` means the program could not be started at all.
    fn run(&mut self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput>;
}

/// Runs commands with [`std::process::Command`], capturing their output
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[OsString]) -> std::io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let tail = stderr_tail("one\ntwo\n\nthree\nfour\n");
        assert_eq!(tail, "two | three | four");
    }

    #[test]
    fn test_failure_reason_without_stderr() {
        let output = CommandOutput {
            success: false,
            code: Some(2),
            stderr: "\n  \n".to_string(),
        };
        assert_eq!(output.failure_reason("pip"), "pip failed with exit status 2");
    }

    #[test]
    fn test_failure_reason_with_signal_and_stderr() {
        let output = CommandOutput {
            success: false,
            code: None,
            stderr: "ERROR: No matching distribution found\n".to_string(),
        };
        assert_eq!(
            output.failure_reason("pip"),
            "pip failed with terminated by signal: ERROR: No matching distribution found"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_code() {
        let mut runner = SystemRunner;
        let output = runner
            .run(
                Path::new("/bin/sh"),
                &[OsString::from("-c"), OsString::from("echo boom >&2; exit 4")],
            )
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(4));
        assert_eq!(output.stderr.trim(), "boom");
    }

    #[test]
    fn test_system_runner_spawn_failure() {
        let mut runner = SystemRunner;
        let result = runner.run(Path::new("/definitely/not/a/program"), &[]);
        assert!(result.is_err());
    }
}
