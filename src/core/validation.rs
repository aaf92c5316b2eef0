//! Input validation for variable records.
//!
//! Validates names and the cross-field rules of the create/edit form.

use crate::error::{Result, ValidationError};

/// Validate a variable name.
///
/// Names must be non-empty and contain no whitespace.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    for (i, ch) in name.chars().enumerate() {
        if ch.is_whitespace() {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!("whitespace at position {}", i + 1),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate the cross-field rules for a run-time record.
///
/// Non-secret records need a value. Secret records need a vault name and
/// a secret name, and must not carry a plain value.
///
/// # Errors
///
/// Returns the first `ValidationError` the fields violate.
pub fn validate_fields(
    name: &str,
    secret: bool,
    value: Option<&str>,
    vault: Option<&str>,
    secret_name: Option<&str>,
) -> Result<()> {
    validate_name(name)?;

    if secret {
        if value.is_some_and(|v| !v.is_empty()) {
            return Err(ValidationError::UnexpectedValue(name.to_string()).into());
        }
        if vault.map_or(true, str::is_empty) {
            return Err(ValidationError::MissingVault(name.to_string()).into());
        }
        if secret_name.map_or(true, str::is_empty) {
            return Err(ValidationError::MissingSecretName(name.to_string()).into());
        }
    } else if value.map_or(true, str::is_empty) {
        return Err(ValidationError::EmptyValue(name.to_string()).into());
    }

    Ok(())
}
