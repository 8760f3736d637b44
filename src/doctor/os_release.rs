//! `/etc/os-release` parsing for distro-specific hints

use std::collections::HashMap;
use std::path::Path;

const OS_RELEASE_PATHS: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Key/value pairs from an os-release file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    values: HashMap<String, String>,
}

/// Package manager family used for fix hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    Fedora,
    Arch,
    Debian,
    Unknown,
}

impl OsRelease {
    /// Load the host's os-release, or an empty set off Linux or when absent
    pub fn load() -> Self {
        if std::env::consts::OS != "linux" {
            return Self::default();
        }

        OS_RELEASE_PATHS
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .and_then(|path| std::fs::read_to_string(path).ok())
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                (key.trim().to_string(), value.to_string())
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Human readable distro name, empty when unknown
    pub fn label(&self) -> String {
        if let Some(pretty) = self.get("PRETTY_NAME").filter(|v| !v.is_empty()) {
            return pretty.to_string();
        }

        let id = self.get("ID").unwrap_or_default();
        match self.get("VERSION_ID") {
            Some(version) if !id.is_empty() && !version.is_empty() => format!("{id} {version}"),
            _ => id.to_string(),
        }
    }

    pub fn family(&self) -> DistroFamily {
        let id = self.get("ID").unwrap_or_default().to_lowercase();
        let like = self.get("ID_LIKE").unwrap_or_default().to_lowercase();
        let tokens: Vec<&str> = std::iter::once(id.as_str())
            .chain(like.split_whitespace())
            .collect();
        let any_of = |names: &[&str]| tokens.iter().any(|token| names.contains(token));

        if any_of(&["fedora", "rhel", "centos", "rocky", "almalinux"]) {
            DistroFamily::Fedora
        } else if any_of(&["arch", "manjaro", "endeavouros"]) {
            DistroFamily::Arch
        } else if any_of(&["ubuntu", "debian", "linuxmint", "pop"]) {
            DistroFamily::Debian
        } else {
            DistroFamily::Unknown
        }
    }
}

impl DistroFamily {
    /// Command that installs Python with venv support
    pub fn python_install_hint(self) -> &'static str {
        match self {
            DistroFamily::Fedora => "sudo dnf install -y python3",
            DistroFamily::Arch => "sudo pacman -S --needed python",
            DistroFamily::Debian => "sudo apt update && sudo apt install -y python3 python3-venv",
            DistroFamily::Unknown => "Install Python 3 with the venv module from your package manager",
        }
    }
}
