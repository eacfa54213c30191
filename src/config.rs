//! Configuration management for vdrive
//!
//! Defaults are registered in code, an optional TOML file overrides them and
//! `VDRIVE_*` environment variables override both.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::navigate::DEFAULT_ROOT_LABEL;
use crate::store::{MAX_FOLDER_DEPTH, MAX_NAME_LENGTH, StoreLimits};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "vdrive";

/// Default capacity of the in-memory blob store (256 MiB).
pub const DEFAULT_MAX_BLOB_BYTES: u64 = 256 * 1024 * 1024;

const ENV_PREFIX: &str = "VDRIVE";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DriveConfig {
    /// Display name of the first breadcrumb
    pub root_label: String,

    /// Longest accepted folder name, in characters
    pub max_name_length: usize,

    /// Deepest accepted folder nesting below ROOT
    pub max_folder_depth: usize,

    /// Total bytes the blob store may hold
    pub max_blob_bytes: u64,

    /// Start the console with the sample folders
    pub seed_sample_folders: bool,

    /// Console prompt
    pub prompt: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            max_name_length: MAX_NAME_LENGTH,
            max_folder_depth: MAX_FOLDER_DEPTH,
            max_blob_bytes: DEFAULT_MAX_BLOB_BYTES,
            seed_sample_folders: true,
            prompt: "vdrive> ".to_string(),
        }
    }
}

impl DriveConfig {
    /// Load configuration from `path` (or `vdrive.toml` if present) with
    /// environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let builder = Config::builder()
            .set_default("root_label", defaults.root_label)?
            .set_default("max_name_length", defaults.max_name_length as i64)?
            .set_default("max_folder_depth", defaults.max_folder_depth as i64)?
            .set_default("max_blob_bytes", defaults.max_blob_bytes as i64)?
            .set_default("seed_sample_folders", defaults.seed_sample_folders)?
            .set_default("prompt", defaults.prompt)?;

        let builder = match path {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: DriveConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_label.trim().is_empty() {
            return Err(ConfigError::Message("root_label cannot be empty".into()));
        }

        if self.max_name_length == 0 {
            return Err(ConfigError::Message(
                "max_name_length must be greater than 0".into(),
            ));
        }

        if self.max_folder_depth == 0 {
            return Err(ConfigError::Message(
                "max_folder_depth must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    pub fn store_limits(&self) -> StoreLimits {
        StoreLimits {
            max_name_length: self.max_name_length,
            max_folder_depth: self.max_folder_depth,
        }
    }
}
