use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WtfError {
    /// Wrong number of arguments for an action
    #[error("action {action} requires {} {expected} argument(s)", qualifier(.extra))]
    Usage {
        action: String,
        expected: usize,
        extra: bool,
    },

    #[error("{0} is not a valid action")]
    InvalidAction(String),

    #[error("{0} requires super user privileges")]
    Privilege(String),

    #[error("Command '{command}' exited with status {code}")]
    ExecutionFailure { command: String, code: i32 },

    #[error("Failed to launch '{command}': {reason}")]
    LaunchFailure { command: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),
}

fn qualifier(extra: &bool) -> &'static str {
    if *extra { "at least" } else { "exactly" }
}

impl WtfError {
    /// Process exit status for this error.
    ///
    /// Usage problems follow the clap convention of 2; a failed command keeps
    /// its own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            WtfError::Usage { .. } | WtfError::InvalidAction(_) => 2,
            WtfError::ExecutionFailure { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WtfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_message_names_action_and_count() {
        let exact = WtfError::Usage {
            action: "info".to_string(),
            expected: 1,
            extra: false,
        };
        assert_eq!(exact.to_string(), "action info requires exactly 1 argument(s)");

        let open = WtfError::Usage {
            action: "install".to_string(),
            expected: 1,
            extra: true,
        };
        assert_eq!(open.to_string(), "action install requires at least 1 argument(s)");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(WtfError::InvalidAction("frobnicate".into()).exit_code(), 2);
        assert_eq!(WtfError::Privilege("install".into()).exit_code(), 1);
        assert_eq!(
            WtfError::ExecutionFailure {
                command: "apt search".into(),
                code: 100
            }
            .exit_code(),
            100
        );
    }
}
