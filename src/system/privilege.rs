use crate::error::{Result, WtfError};
use crate::ui;

/// Precondition check for actions that modify the package database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegeGuard {
    elevated: bool,
    bypass: bool,
}

impl PrivilegeGuard {
    /// Guard for the running process. With `bypass` set (test mode) missing
    /// privileges are only traced.
    pub fn detect(bypass: bool) -> Self {
        Self {
            elevated: is_elevated(),
            bypass,
        }
    }

    pub fn fixed(elevated: bool, bypass: bool) -> Self {
        Self { elevated, bypass }
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Fail with [`WtfError::Privilege`] unless the process may perform `action`.
    pub fn require_elevated(&self, action: &str) -> Result<()> {
        if self.elevated {
            return Ok(());
        }
        if self.bypass {
            ui::trace(&format!(
                "test mode: {} would require super user privileges",
                action
            ));
            return Ok(());
        }
        Err(WtfError::Privilege(action.to_string()))
    }
}

#[cfg(unix)]
fn is_elevated() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
fn is_elevated() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_passes() {
        assert!(PrivilegeGuard::fixed(true, false).require_elevated("install").is_ok());
    }

    #[test]
    fn unprivileged_fails_with_action_name() {
        let err = PrivilegeGuard::fixed(false, false)
            .require_elevated("uninstall")
            .unwrap_err();
        assert!(matches!(err, WtfError::Privilege(ref action) if action == "uninstall"));
        assert_eq!(err.to_string(), "uninstall requires super user privileges");
    }

    #[test]
    fn bypass_allows_unprivileged() {
        assert!(PrivilegeGuard::fixed(false, true).require_elevated("install").is_ok());
    }

    #[test]
    fn detect_matches_process() {
        let guard = PrivilegeGuard::detect(false);
        assert_eq!(guard.is_elevated(), is_elevated());
    }
}
