//! Reachability of the launcher directory on PATH

use std::ffi::OsStr;
use std::path::Path;

/// Whether the launcher can be invoked by name from the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    /// The bin directory is already an entry of PATH
    Ready,
    /// A new shell (or a manual export) is needed first
    NeedsRestart,
}

impl Reachability {
    pub fn check(search_path: &OsStr, bin_dir: &Path) -> Self {
        if is_on_search_path(search_path, bin_dir) {
            Reachability::Ready
        } else {
            Reachability::NeedsRestart
        }
    }
}

/// Whether `dir` is one of the entries of the `:`-separated `search_path`
///
/// Entries are compared whole, so `/usr/local/bin` does not match an entry
/// `/usr/local/bin2` and a prefix of an entry never counts.
pub fn is_on_search_path(search_path: &OsStr, dir: &Path) -> bool {
    std::env::split_paths(search_path).any(|entry| entry == dir)
}
