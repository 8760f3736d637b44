//! Idempotent PATH export reconciliation for shell startup files

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs};

use super::MARKER_COMMENT;

/// What [`reconcile`] did to the startup file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellConfigOutcome {
    /// The export line was already present; nothing was written
    AlreadyPresent { path: PathBuf },
    /// The marker and export line were appended
    Appended { path: PathBuf },
}

impl ShellConfigOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ShellConfigOutcome::AlreadyPresent { path } | ShellConfigOutcome::Appended { path } => {
                path
            }
        }
    }
}

/// Check whether `rc_file` already contains `export_line` verbatim
///
/// A missing file does not contain anything. The file is searched as raw
/// bytes, so startup files in other encodings are still readable.
pub fn contains_export_line(rc_file: &Path, export_line: &str) -> Result<bool> {
    if !rc_file.exists() {
        return Ok(false);
    }

    let content = std::fs::read(rc_file)
        .map_err(|e| fs::io_failed(rc_file, "read shell configuration", &e))?;
    Ok(contains_bytes(&content, export_line.as_bytes()))
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

/// The block appended to a startup file
pub fn append_block(export_line: &str) -> String {
    format!("\n{MARKER_COMMENT}\n{export_line}\n")
}

/// Ensure `rc_file` contains `export_line`, appending it once if missing
///
/// The whole block is written with a single append so reruns never duplicate it.
pub fn reconcile(rc_file: &Path, export_line: &str) -> Result<ShellConfigOutcome> {
    if contains_export_line(rc_file, export_line)? {
        return Ok(ShellConfigOutcome::AlreadyPresent {
            path: rc_file.to_path_buf(),
        });
    }

    if let Some(parent) = rc_file.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| fs::io_failed(parent, "create directory", &e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(rc_file)
        .map_err(|e| fs::io_failed(rc_file, "open shell configuration", &e))?;
    file.write_all(append_block(export_line).as_bytes())
        .map_err(|e| fs::io_failed(rc_file, "append to shell configuration", &e))?;

    Ok(ShellConfigOutcome::Appended {
        path: rc_file.to_path_buf(),
    })
}
