//! Prerequisite checks

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

/// Locate `program` on `search_path`
///
/// A program given with a directory component (`/usr/bin/python3`,
/// `./python`) is checked directly instead of being searched for.
pub fn find_program(program: &str, search_path: &OsStr, cwd: &Path) -> Result<PathBuf> {
    let missing = || InstallerError::MissingDependency {
        program: program.to_string(),
    };

    if Path::new(program).components().count() > 1 {
        let candidate = cwd.join(program);
        return if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(missing())
        };
    }

    which::which_in(program, Some(search_path), cwd).map_err(|_| missing())
}
