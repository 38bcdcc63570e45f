//! Settings Module
//!
//! Optional defaults read from `settings.kdl`:
//!
//! ```kdl
//! backend "dnf"
//! refresh #true
//! names-only "true"
//! output "/var/log/wtfpkg/list.txt"
//! color "never"
//! ```

use crate::core::types::Backend;
use crate::error::{Result, WtfError};
use crate::project_identity;
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::{Path, PathBuf};

const VALID_KEYS: [&str; 5] = ["backend", "refresh", "names-only", "output", "color"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(invalid_value("color", other, "auto, always, never")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub backend: Option<Backend>,
    pub refresh: bool,
    pub names_only: bool,
    pub output: Option<PathBuf>,
    pub color: ColorMode,
}

impl Settings {
    /// Load settings from `explicit`, `$WTFPKG_CONFIG`, or the user config dir.
    ///
    /// An explicitly named file must exist; the other locations fall back to
    /// defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = match std::env::var_os(project_identity::env_key("CONFIG")) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => match paths::settings_file() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default()),
            },
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WtfError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let doc: KdlDocument = content.parse()?;
        let mut settings = Settings::default();

        for node in doc.nodes() {
            let key = node.name().value();
            match key {
                "backend" => settings.backend = Some(string_value(node)?.parse()?),
                "refresh" => settings.refresh = bool_value(node)?,
                "names-only" => settings.names_only = bool_value(node)?,
                "output" => {
                    let value = string_value(node)?;
                    settings.output = Some(paths::expand_home(Path::new(&value))?);
                }
                "color" => settings.color = ColorMode::parse(&string_value(node)?)?,
                other => {
                    return Err(WtfError::ConfigError(format!(
                        "Unknown setting: '{}'. Valid settings: {}",
                        other,
                        VALID_KEYS.join(", ")
                    )));
                }
            }
        }

        Ok(settings)
    }
}

fn string_value(node: &KdlNode) -> Result<String> {
    node.entries()
        .first()
        .and_then(|entry| entry.value().as_string())
        .map(str::to_string)
        .ok_or_else(|| {
            WtfError::ConfigError(format!(
                "Setting '{}' expects a string value",
                node.name().value()
            ))
        })
}

fn bool_value(node: &KdlNode) -> Result<bool> {
    let key = node.name().value();
    let entry = node.entries().first().ok_or_else(|| {
        WtfError::ConfigError(format!("Setting '{}' expects a boolean value", key))
    })?;

    if let Some(flag) = entry.value().as_bool() {
        return Ok(flag);
    }
    match entry.value().as_string() {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(invalid_value(key, other, "true, false")),
        None => Err(WtfError::ConfigError(format!(
            "Setting '{}' expects a boolean value",
            key
        ))),
    }
}

fn invalid_value(key: &str, value: &str, valid: &str) -> WtfError {
    WtfError::ConfigError(format!(
        "Invalid value for '{}': '{}'. Valid: {}",
        key, value, valid
    ))
}
