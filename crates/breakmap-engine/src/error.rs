//! Error types for engine operations

use breakmap_domain::ConstructionError;
use thiserror::Error;

/// Errors raised while loading a classifier from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Breakpoints were rejected by the break tree
    #[error("Invalid breakpoints: {0}")]
    Construction(#[from] ConstructionError),
}
