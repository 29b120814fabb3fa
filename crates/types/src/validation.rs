//! Input validation for registry operation payloads.
//!
//! Validation runs eagerly at the top of each mutating operation, before any
//! write is attempted, so a rejected call never leaves partial state. Limits
//! come from [`ValidationConfig`].

use std::fmt;

use crate::config::ValidationConfig;
use crate::types::{LandId, LandPayload};

/// Validation error with structured context.
///
/// Contains the specific constraint that was violated and the field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Description of the violated constraint.
    pub constraint: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a land payload against configured limits.
///
/// Every field must be non-empty and within `config.max_field_bytes` in
/// UTF-8 byte length.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first field that is empty or
/// exceeds the configured byte limit.
pub fn validate_payload(
    payload: &LandPayload,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    validate_field("location", &payload.location, config)?;
    validate_field("owner", &payload.owner, config)?;
    validate_field("unique_identifier", &payload.unique_identifier, config)?;
    Ok(())
}

/// Validates a land identifier supplied for an update.
///
/// # Errors
///
/// Returns [`ValidationError`] if the identifier is empty or exceeds the
/// configured byte limit.
pub fn validate_id(id: &LandId, config: &ValidationConfig) -> Result<(), ValidationError> {
    validate_field("land_id", id.as_str(), config)
}

/// Validates the receiving owner of a transfer.
///
/// # Errors
///
/// Returns [`ValidationError`] if the owner is empty or exceeds the
/// configured byte limit.
pub fn validate_owner(owner: &str, config: &ValidationConfig) -> Result<(), ValidationError> {
    validate_field("to_owner", owner, config)
}

/// Validates a single required string field.
///
/// # Errors
///
/// Returns [`ValidationError`] if the value is empty or exceeds
/// `config.max_field_bytes` in UTF-8 byte length.
pub fn validate_field(
    name: &str,
    value: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError {
            field: name.to_string(),
            constraint: "must not be empty".to_string(),
        });
    }
    if value.len() > config.max_field_bytes {
        return Err(ValidationError {
            field: name.to_string(),
            constraint: format!(
                "length {} bytes exceeds maximum {} bytes",
                value.len(),
                config.max_field_bytes
            ),
        });
    }
    Ok(())
}
