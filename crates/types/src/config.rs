//! Registry configuration types.
//!
//! Deserialized from the adapter's settings source with serde field defaults;
//! call `validate()` after deserialization to reject out-of-range values
//! before any store is opened.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Minimum allowed payload field limit: 1 byte.
const MIN_FIELD_BYTES: usize = 1;

/// Maximum allowed payload field limit: 64 KiB.
const MAX_FIELD_BYTES: usize = 64 * 1024;

/// Configuration errors.
#[derive(Debug, Snafu)]
pub enum ConfigError {
    /// A configuration value is out of range.
    #[snafu(display("Configuration error: {message}"))]
    Validation {
        /// Error description.
        message: String,
    },
}

/// Limits applied to caller-supplied payload fields.
///
/// # Validation Rules
///
/// - `max_field_bytes` must be between 1 and 65,536
///
/// # Example
///
/// ```
/// # use land_registry_types::config::ValidationConfig;
/// let config = ValidationConfig::builder()
///     .max_field_bytes(512)
///     .build()
///     .expect("valid validation config");
/// assert_eq!(config.max_field_bytes, 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum UTF-8 byte length for each payload field.
    #[serde(default = "default_max_field_bytes")]
    pub max_field_bytes: usize,
}

#[bon::bon]
impl ValidationConfig {
    /// Creates a new validation configuration with range checking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `max_field_bytes` is outside
    /// 1–65,536.
    #[builder]
    pub fn new(
        #[builder(default = default_max_field_bytes())] max_field_bytes: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self { max_field_bytes };
        config.validate()?;
        Ok(config)
    }
}

impl ValidationConfig {
    /// Validates the configuration values.
    ///
    /// Call after deserialization to ensure values are within valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_field_bytes < MIN_FIELD_BYTES || self.max_field_bytes > MAX_FIELD_BYTES {
            return Err(ConfigError::Validation {
                message: format!(
                    "max_field_bytes must be between {} and {}, got {}",
                    MIN_FIELD_BYTES, MAX_FIELD_BYTES, self.max_field_bytes
                ),
            });
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { max_field_bytes: default_max_field_bytes() }
    }
}

fn default_max_field_bytes() -> usize {
    1024
}

/// Top-level registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Data directory for the registry database.
    ///
    /// When unset the adapter runs against an ephemeral directory and should
    /// warn that data will not survive the process.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Payload field limits.
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl RegistryConfig {
    /// Whether the registry would run without a persistent data directory.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.data_dir.is_none()
    }

    /// Validates the nested configuration sections.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any section is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()
    }
}
