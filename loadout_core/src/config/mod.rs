//! Configuration loading from TOML and JSON files

mod settings;
mod specialty;

pub use settings::BuilderSettings;
pub use specialty::{
    load_specialty_sockets, parse_specialty_sockets_json, ModSocketMetadata, SpecialtySockets,
};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON data file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let data: T = serde_json::from_str(content)?;
    Ok(data)
}

/// Top-level builder configuration file
///
/// ```toml
/// [filter]
/// minimum_stat_total = 55
/// assume_masterwork = true
///
/// [[specialty_sockets]]
/// season = 10
/// tag = "warmindcell"
/// socket_type_hash = 1234
/// plug_category_hashes = [4567]
/// compatible_plug_category_hashes = [4567]
/// empty_mod_socket_hash = 89
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default)]
    pub filter: BuilderSettings,
    #[serde(default)]
    pub specialty_sockets: Vec<ModSocketMetadata>,
}

impl BuilderConfig {
    /// Build the specialty socket registry described by this config
    pub fn specialty_registry(&self) -> SpecialtySockets {
        SpecialtySockets::new(self.specialty_sockets.clone())
    }
}

/// Load and validate a builder configuration from a TOML file
pub fn load_builder_config(path: &Path) -> Result<BuilderConfig, ConfigError> {
    let config: BuilderConfig = load_toml(path)?;
    config.filter.validate()?;
    Ok(config)
}

/// Load and validate a builder configuration from a TOML string
pub fn parse_builder_config(content: &str) -> Result<BuilderConfig, ConfigError> {
    let config: BuilderConfig = parse_toml(content)?;
    config.filter.validate()?;
    Ok(config)
}
