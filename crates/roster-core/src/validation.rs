//! Validation utilities.

use crate::RosterError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `RosterError` on failure.
    fn validate_request(&self) -> Result<(), RosterError> {
        self.validate().map_err(validation_errors_to_roster_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `RosterError`.
///
/// Field messages are sorted by field name so the resulting message is stable.
#[must_use]
pub fn validation_errors_to_roster_error(errors: ValidationErrors) -> RosterError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    messages.sort();

    RosterError::Validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Contact {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
        #[validate(required)]
        email: Option<String>,
    }

    #[test]
    fn test_valid_struct_passes() {
        let contact = Contact {
            name: Some("Ann".to_string()),
            email: Some("a@x.com".to_string()),
        };
        assert!(contact.validate_request().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let contact = Contact {
            name: None,
            email: None,
        };

        let err = contact.validate_request().unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_string(),
            "Validation error: email: required; name: name is required"
        );
    }
}
