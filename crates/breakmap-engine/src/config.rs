//! Configuration file parsing for classifiers
//!
//! Loads a mapping policy and a breakpoint table from TOML:
//!
//! ```toml
//! [policy]
//! boundary = "lte"        # lt | lte | gt | gte | exact
//! no_data_value = 0
//! fallback_value = 0
//! strict = false
//!
//! [[breaks]]
//! value = 10.0
//! class = 1
//!
//! [[breaks]]
//! value = 20.0
//! class = 2
//! ```
//!
//! The `[policy]` table and each of its fields are optional; omitted fields
//! take the preset for the class type.

use crate::ConfigError;
use breakmap_domain::{Breakpoint, ClassValue, DomainValue, MappingPolicy, ValueClassifier};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Classifier configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: Serialize, B: Serialize",
    deserialize = "A: Deserialize<'de>, B: ClassValue + Deserialize<'de>"
))]
pub struct ClassifierConfig<A, B> {
    /// Policy applied to every lookup
    #[serde(default)]
    pub policy: MappingPolicy<B>,

    /// Breakpoint table, in any order
    #[serde(default)]
    pub breaks: Vec<Breakpoint<A, B>>,
}

impl<A, B> ClassifierConfig<A, B>
where
    A: DomainValue + DeserializeOwned,
    B: ClassValue + DeserializeOwned,
{
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;

        // Validate required fields
        if config.breaks.is_empty() {
            return Err(ConfigError::MissingField("breaks".to_string()));
        }

        Ok(config)
    }

    /// Build the classifier described by this configuration
    pub fn build(self) -> Result<ValueClassifier<A, B>, ConfigError> {
        let count = self.breaks.len();
        let boundary = self.policy.boundary;
        let strict = self.policy.strict;

        let classifier = ValueClassifier::new(self.breaks, self.policy)?;

        tracing::info!(
            breaks = count,
            boundary = %boundary,
            strict,
            height = classifier.tree().height(),
            "Built classifier"
        );

        Ok(classifier)
    }
}

impl<A: Serialize, B: Serialize> ClassifierConfig<A, B> {
    /// Render this configuration as TOML that `from_toml_str` accepts
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

/// Load and build a classifier from a TOML file in one step
pub fn load_classifier<A, B, P>(path: P) -> Result<ValueClassifier<A, B>, ConfigError>
where
    A: DomainValue + DeserializeOwned,
    B: ClassValue + DeserializeOwned,
    P: AsRef<Path>,
{
    ClassifierConfig::from_file(path)?.build()
}
