//! Local option-validation errors.

use thiserror::Error;

/// A request's options failed validation before any I/O happened.
///
/// These are always recoverable: supply the named field and call the
/// operation again. No network traffic is generated by a call that
/// fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("required field `{field}` is missing or empty")]
    MissingField {
        /// Name of the offending option field.
        field: &'static str,
    },
}

impl ValidationError {
    /// Creates a missing-field error for `field`.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

/// Checks that a required string identifier is non-empty.
///
/// Path identifiers are interpolated into request URLs, so an empty
/// value would silently produce a different endpoint; callers get a
/// validation error naming the field instead.
///
/// ## Examples
///
/// ```rust
/// use cis_core::error::not_empty;
///
/// assert!(not_empty("zone_id", "abc123").is_ok());
/// assert!(not_empty("zone_id", "").is_err());
/// ```
pub fn not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::missing_field(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty_rejects_whitespace() {
        assert_eq!(
            not_empty("crn", "   "),
            Err(ValidationError::missing_field("crn"))
        );
    }

    #[test]
    fn test_display_names_field() {
        let err = ValidationError::missing_field("instance_id");
        assert!(err.to_string().contains("instance_id"));
    }
}
