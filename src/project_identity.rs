//! Central project identity contract.
//!
//! Single source of truth for names that show up at runtime.

pub const BINARY_NAME: &str = "wtfpkg";
pub const CONFIG_DIR_NAME: &str = "wtfpkg";
pub const ENV_PREFIX: &str = "WTFPKG";
pub const SETTINGS_FILE_BASENAME: &str = "settings.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_uses_prefix() {
        assert_eq!(env_key("CONFIG"), "WTFPKG_CONFIG");
    }
}
