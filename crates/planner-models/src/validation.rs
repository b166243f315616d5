//! Field validation errors shared by every draft and patch type.

use std::fmt;

use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the offending field as it appears in JSON.
    pub field: String,
    /// Human readable reason.
    pub message: String,
}

/// Collection of field errors produced while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates an empty error collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    /// Records another rejected field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Returns the recorded field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns true when nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true when the given field was rejected.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Converts the collector into a result: `Ok` if no errors were recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Checks a required text field: non-blank and at most `max_len` chars.
    pub fn check_text(&mut self, field: &str, value: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.push(field, "this field may not be blank");
        } else if value.chars().count() > max_len {
            self.push(
                field,
                format!("ensure this field has no more than {} characters", max_len),
            );
        }
    }

    /// Checks a numeric field is a finite number.
    pub fn check_finite(&mut self, field: &str, value: f64) {
        if !value.is_finite() {
            self.push(field, "a valid number is required");
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "invalid input");
        }
        let parts: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector_is_ok() {
        assert!(ValidationError::new().into_result().is_ok());
    }

    #[test]
    fn test_display_joins_fields() {
        let mut err = ValidationError::field("title", "this field may not be blank");
        err.push("days", "a valid integer is required");
        assert_eq!(
            err.to_string(),
            "title: this field may not be blank; days: a valid integer is required"
        );
        assert!(err.has_field("days"));
    }

    #[test]
    fn test_check_text_limits() {
        let mut err = ValidationError::new();
        err.check_text("title", "ok", 5);
        assert!(err.is_empty());

        err.check_text("title", "   ", 5);
        err.check_text("author", "toolong", 5);
        assert_eq!(err.errors().len(), 2);
        assert!(err.errors()[1].message.contains("no more than 5"));
    }
}
