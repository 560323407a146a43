//! Configuration file support for iq-label-inventory.
//!
//! Provides YAML-based configuration through `iq-label-inventory.config.yml`
//! files, and resolution of the effective run settings from command-line
//! overrides, the config file, and built-in defaults (in that order).

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::adapters::outbound::filesystem::DEFAULT_OUTPUT_FILE;
use crate::adapters::outbound::network::{BasicCredentials, DEFAULT_CREDENTIALS, DEFAULT_SERVER_URL};
use crate::shared::error::InventoryError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

const CONFIG_FILENAME: &str = "iq-label-inventory.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub auth: Option<String>,
    pub output: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub compact: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let hint = "\n\n💡 Hint: Check that the file exists and is readable.";
    validate_regular_file(path, "config file")
        .with_context(|| format!("Failed to read config file: {}{}", path.display(), hint))?;

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read config file: {}{}", path.display(), hint))?
        .len();
    validate_file_size(size, path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}{}", path.display(), hint))?;

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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.concurrency == Some(0) {
        return Err(InventoryError::InvalidConfig {
            message: "concurrency must be at least 1. Omit it to send every request of a stage at once.".to_string(),
        }
        .into());
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub url: Option<String>,
    pub auth: Option<String>,
    pub output: Option<PathBuf>,
    pub concurrency: Option<NonZeroUsize>,
    pub compact: bool,
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub credentials: BasicCredentials,
    pub output: PathBuf,
    pub concurrency: Option<NonZeroUsize>,
    pub compact: bool,
}

impl Settings {
    /// Merges command-line overrides over the config file over defaults
    ///
    /// # Errors
    /// Returns an error if the resulting credentials are not `USER:PASSWORD`
    pub fn resolve(overrides: SettingsOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let server_url = overrides
            .url
            .or(config.url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let auth = overrides
            .auth
            .or(config.auth)
            .unwrap_or_else(|| DEFAULT_CREDENTIALS.to_string());
        let credentials: BasicCredentials = auth.parse()?;

        let output = overrides
            .output
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let concurrency = overrides
            .concurrency
            .or(config.concurrency.and_then(NonZeroUsize::new));

        let compact = overrides.compact || config.compact.unwrap_or(false);

        Ok(Self {
            server_url,
            credentials,
            output,
            concurrency,
            compact,
        })
    }
}
