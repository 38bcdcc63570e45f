use std::path::PathBuf;

/// Options the package layer reads for one invocation.
///
/// Built once by the CLI layer and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub debug: u8,
    pub verbose: u8,
    /// Refresh the package index before searching or installing
    pub refresh: bool,
    pub quiet: bool,
    /// File that routed (list) output is written to
    pub output: Option<PathBuf>,
    /// apt only: restrict search to package names
    pub names_only: bool,
    /// Diagnostic mode: privilege requirements are traced, not enforced
    pub test: bool,
}

impl BackendConfig {
    pub fn is_debug(&self) -> bool {
        self.debug > 0
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Whether dispatch and command failures should be traced.
    pub fn is_tracing(&self) -> bool {
        self.is_debug() || self.is_verbose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_silent() {
        let config = BackendConfig::default();
        assert!(!config.is_tracing());
        assert!(!config.refresh);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_tracing_levels() {
        let debug = BackendConfig {
            debug: 1,
            ..Default::default()
        };
        assert!(debug.is_tracing());

        let verbose = BackendConfig {
            verbose: 2,
            ..Default::default()
        };
        assert!(verbose.is_verbose());
        assert!(verbose.is_tracing());
    }
}
