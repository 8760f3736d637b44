//! File system errors

use std::path::Path;

use super::InstallerError;

/// Creates a file system error for `path` from an IO error
pub fn io_failed(path: &Path, operation: &str, err: &std::io::Error) -> InstallerError {
    InstallerError::Filesystem {
        path: path.display().to_string(),
        reason: format!("{operation}: {err}"),
    }
}
