//! Configuration file support for line-reverser.
//!
//! Provides YAML-based configuration through `line-reverser.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::line_reversal::policies::TrimPolicy;
use crate::shared::error::ReverserError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "line-reverser.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub trim: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured trim policy, if any.
    ///
    /// # Errors
    /// Returns a validation error when `trim` names no known policy.
    pub fn trim_policy(&self) -> Result<Option<TrimPolicy>> {
        self.trim
            .as_deref()
            .map(|t| {
                TrimPolicy::from_str(t)
                    .map_err(|e| validation_error(format!("Invalid config: {}", e)))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes as YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validation_error(message: String) -> anyhow::Error {
    ReverserError::Validation { message }.into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, value) in [
        ("input_path", &config.input_path),
        ("output_path", &config.output_path),
    ] {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(validation_error(format!(
                "Invalid config: {} must not be empty.",
                field
            )));
        }
    }

    config.trim_policy()?;

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
