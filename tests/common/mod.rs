//! Common test utilities for installer integration tests
//!
//! Every test gets a private home directory and a fake `python3` that emulates
//! `-m venv` and `-m pip install` with plain files, so no network or real
//! Python is needed.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Fake interpreter; copies itself into the venv so pip calls land here too
const FAKE_PYTHON: &str = r#"#!/bin/sh
for last; do :; done
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
  if [ -n "$FAKE_VENV_FAIL" ]; then echo "Error: venv exploded" >&2; exit 3; fi
  mkdir -p "$last/bin" && cp "$0" "$last/bin/python" && chmod +x "$last/bin/python"
  exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
  if [ -n "$FAKE_PIP_FAIL" ]; then echo "ERROR: Could not install packages" >&2; exit 1; fi
  printf '%s\n' "$*" >> "$(dirname "$0")/pip.log"
  if [ "$last" != "pip" ]; then
    printf '#!/bin/sh\necho "npmctl fake $*"\n' > "$(dirname "$0")/npmctl"
    chmod +x "$(dirname "$0")/npmctl"
  fi
  exit 0
fi
exit 1
"#;

/// A throwaway home directory with a fake interpreter on PATH
pub struct TestHome {
    pub temp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub fake_bin: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        let work = temp.path().join("work");
        let fake_bin = temp.path().join("fake-bin");
        for dir in [&home, &work, &fake_bin] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }

        let python = fake_bin.join("python3");
        std::fs::write(&python, FAKE_PYTHON).expect("Failed to write fake python");
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake python");

        Self {
            temp,
            home,
            work,
            fake_bin,
        }
    }

    /// Default PATH: fake interpreter plus the system basics the fake needs
    pub fn search_path(&self) -> String {
        format!("{}:/usr/bin:/bin", self.fake_bin.display())
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.home.join(".local/bin")
    }

    pub fn launcher(&self) -> PathBuf {
        self.bin_dir().join("npmctl")
    }

    pub fn env_dir(&self) -> PathBuf {
        self.home.join(".local/share/npmctl/venv")
    }

    pub fn pip_log(&self) -> String {
        std::fs::read_to_string(self.env_dir().join("bin/pip.log")).unwrap_or_default()
    }

    pub fn read_home_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.home.join(name)).expect("Failed to read home file")
    }

    pub fn home_file_exists(&self, name: &str) -> bool {
        self.home.join(name).exists()
    }

    /// Installer command isolated from the caller's environment
    #[allow(deprecated)]
    pub fn cmd(&self, shell: Option<&str>) -> Command {
        let mut cmd = Command::cargo_bin("npmctl-install").expect("binary should build");
        cmd.env_clear()
            .current_dir(&self.work)
            .env("HOME", &self.home)
            .env("PATH", self.search_path());
        if let Some(shell) = shell {
            cmd.env("SHELL", shell);
        }
        cmd
    }

    pub fn write_manifest(&self) {
        std::fs::write(
            self.work.join("pyproject.toml"),
            "[project]\nname = \"npmctl\"\n",
        )
        .expect("Failed to write manifest");
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

/// Count non-overlapping occurrences of `needle` in the file at `path`
pub fn count_in_file(path: &Path, needle: &str) -> usize {
    std::fs::read_to_string(path)
        .map(|content| content.matches(needle).count())
        .unwrap_or(0)
}
