//! Contact form validation: field rules and the outcome they produce

pub mod rules;
pub mod validators;

pub use rules::*;
pub use validators::ContactFormValidator;

use crate::models::ContactFormRequest;
use std::collections::BTreeMap;
use validator::ValidationErrors;

pub const INVALID_REQUEST_TYPE: &str = "invalid request type";

/// Field-level and global errors collected for one submission.
///
/// Each field carries at most one message; the first failing rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub field_errors: BTreeMap<String, String>,
    pub global_error: Option<String>,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn invalid_request_type() -> Self {
        Self {
            field_errors: BTreeMap::new(),
            global_error: Some(INVALID_REQUEST_TYPE.to_string()),
        }
    }

    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let mut outcome = Self::success();

        for (field, field_errors) in errors.field_errors() {
            let message = field_errors
                .iter()
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            outcome.add_field_error(&field, &message);
        }

        outcome
    }

    pub fn add_field_error(&mut self, field: &str, message: &str) {
        self.field_errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty() && self.global_error.as_deref().map_or(true, str::is_empty)
    }
}

/// Checks a submission and reports every failing field.
pub trait Validator: Send + Sync {
    fn check(&self, request: &ContactFormRequest) -> ValidationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_field_error_wins() {
        let mut outcome = ValidationOutcome::success();
        outcome.add_field_error("name", "first");
        outcome.add_field_error("name", "second");
        assert_eq!(outcome.field_errors.len(), 1);
        assert_eq!(outcome.field_errors["name"], "first");
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_global_error_makes_outcome_invalid() {
        let outcome = ValidationOutcome::invalid_request_type();
        assert!(!outcome.is_valid());
        assert!(outcome.field_errors.is_empty());
        assert_eq!(outcome.global_error.as_deref(), Some("invalid request type"));
    }

    #[test]
    fn test_empty_outcome_is_valid() {
        assert!(ValidationOutcome::success().is_valid());
    }
}
