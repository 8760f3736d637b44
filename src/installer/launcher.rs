//! Launcher shim
//!
//! The launcher is a two-line POSIX shell script in the user's bin directory
//! that execs the console script inside the runtime environment.

use std::path::Path;

use crate::error::{Result, fs};
use crate::shell::escape_double_quoted;

/// Shim content forwarding all arguments to `target`
pub fn render(target: &Path) -> String {
    format!(
        "#!/usr/bin/env sh\nexec \"{}\" \"$@\"\n",
        escape_double_quoted(&target.display().to_string())
    )
}

/// Write the launcher at `path`, replacing whatever is there
pub fn write(path: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| fs::io_failed(parent, "create directory", &e))?;
    }

    std::fs::write(path, render(target))
        .map_err(|e| fs::io_failed(path, "write launcher", &e))?;
    make_executable(path)
}

/// Whether the launcher at `path` forwards to `target`
pub fn is_current(path: &Path, target: &Path) -> bool {
    std::fs::read_to_string(path).is_ok_and(|content| content == render(target))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .map_err(|e| fs::io_failed(path, "set launcher permissions", &e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render() {
        let content = render(Path::new("/home/ada/.local/share/npmctl/venv/bin/npmctl"));
        assert_eq!(
            content,
            "#!/usr/bin/env sh\nexec \"/home/ada/.local/share/npmctl/venv/bin/npmctl\" \"$@\"\n"
        );
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let launcher = temp.path().join("deep/bin/npmctl");
        let target = Path::new("/opt/npmctl/venv/bin/npmctl");

        write(&launcher, target).expect("write should succeed");

        assert!(is_current(&launcher, target));
    }

    #[test]
    fn test_write_overwrites_previous_launcher() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let launcher = temp.path().join("npmctl");
        std::fs::write(&launcher, "#!/bin/sh\necho stale\n").expect("Failed to seed launcher");

        write(&launcher, Path::new("/old/venv/bin/npmctl")).expect("first write");
        write(&launcher, Path::new("/new/venv/bin/npmctl")).expect("second write");

        let content = std::fs::read_to_string(&launcher).expect("Failed to read launcher");
        assert_eq!(content, render(Path::new("/new/venv/bin/npmctl")));
        assert!(!content.contains("/old/"));
        assert!(!content.contains("stale"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_sets_executable_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("Failed to create temp directory");
        let launcher = temp.path().join("npmctl");
        write(&launcher, Path::new("/opt/venv/bin/npmctl")).expect("write should succeed");

        let mode = std::fs::metadata(&launcher)
            .expect("Failed to stat launcher")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_is_current_missing_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        assert!(!is_current(&temp.path().join("npmctl"), Path::new("/x")));
    }
}
