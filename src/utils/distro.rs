use crate::core::types::Backend;
use crate::error::{Result, WtfError};

const OS_RELEASE: &str = "/etc/os-release";

/// Distro family, used to pick a package manager when none is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroType {
    Arch,    // Arch Linux and derivatives (EndeavourOS, Manjaro, etc.)
    Debian,  // Debian and derivatives (Ubuntu, Mint, etc.)
    Fedora,  // Fedora and derivatives (RHEL, CentOS, etc.)
    Unknown, // Unable to determine
}

impl DistroType {
    /// Detect the current distro from /etc/os-release, then by probing binaries
    pub fn detect() -> Self {
        if let Ok(content) = std::fs::read_to_string(OS_RELEASE) {
            let distro = Self::from_os_release(&content);
            if distro != DistroType::Unknown {
                return distro;
            }
        }

        if which::which("pacman").is_ok() {
            DistroType::Arch
        } else if which::which("apt").is_ok() || which::which("dpkg").is_ok() {
            DistroType::Debian
        } else if which::which("dnf").is_ok() || which::which("yum").is_ok() {
            DistroType::Fedora
        } else {
            DistroType::Unknown
        }
    }

    /// Classify os-release content by its `ID` and `ID_LIKE` fields
    pub fn from_os_release(content: &str) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if key.trim() == "ID" || key.trim() == "ID_LIKE" {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                ids.extend(value.split_whitespace().map(|s| s.to_lowercase()));
            }
        }

        let has = |names: &[&str]| ids.iter().any(|id| names.contains(&id.as_str()));

        if has(&["arch", "archlinux", "endeavouros", "manjaro", "garuda", "artix"]) {
            DistroType::Arch
        } else if has(&["debian", "ubuntu", "linuxmint", "pop", "elementary"]) {
            DistroType::Debian
        } else if has(&["fedora", "rhel", "centos", "rocky", "almalinux", "amzn"]) {
            DistroType::Fedora
        } else {
            DistroType::Unknown
        }
    }

    /// The package manager for this distro family.
    ///
    /// Fedora-like systems prefer dnf and fall back to yum when dnf is absent.
    pub fn backend(&self) -> Option<Backend> {
        match self {
            DistroType::Arch => Some(Backend::Pacman),
            DistroType::Debian => Some(Backend::Apt),
            DistroType::Fedora => {
                if which::which("dnf").is_ok() || which::which("yum").is_err() {
                    Some(Backend::dnf())
                } else {
                    Some(Backend::yum())
                }
            }
            DistroType::Unknown => None,
        }
    }
}

/// Detect the backend for the running host.
pub fn detect_backend() -> Result<Backend> {
    DistroType::detect().backend().ok_or_else(|| {
        WtfError::DependencyMissing(format!(
            "no supported package manager found (expected one of: {})",
            Backend::NAMES.join(", ")
        ))
    })
}
