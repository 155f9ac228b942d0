//! Validator implementations

use super::{ValidationOutcome, Validator};
use crate::models::ContactFormRequest;
use validator::Validate;

/// Applies the name, email and message rules declared on
/// [`ContactFormRequest`]. Every field is checked; nothing short-circuits
/// across fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidator;

impl ContactFormValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for ContactFormValidator {
    fn check(&self, request: &ContactFormRequest) -> ValidationOutcome {
        match request.validate() {
            Ok(()) => ValidationOutcome::success(),
            Err(errors) => {
                let outcome = ValidationOutcome::from_validation_errors(&errors);
                tracing::debug!(
                    fields = ?outcome.field_errors.keys().collect::<Vec<_>>(),
                    "contact form failed validation"
                );
                outcome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, email: &str, message: &str) -> ValidationOutcome {
        ContactFormValidator::new().check(&ContactFormRequest::new(name, email, message))
    }

    #[test]
    fn test_valid_and_field_error_count() {
        let cases = [
            (("", "", ""), false, 3),
            (("Gavin Thomas", "", ""), false, 2),
            (("Gavin Thomas", "", "This is a test message."), false, 1),
            (("Gavin Thomas", "test@example.com", ""), false, 1),
            (("Gavin Thomas", "test@example.com", " "), false, 1),
            (("Gavin Thomas", "test@example.com", "This is a test message."), true, 0),
        ];

        for ((name, email, message), expected_valid, expected_count) in cases {
            let outcome = check(name, email, message);
            assert_eq!(outcome.is_valid(), expected_valid, "{:?}", (name, email, message));
            assert_eq!(outcome.field_errors.len(), expected_count, "{:?}", (name, email, message));
        }
    }

    #[test]
    fn test_empty_submission_has_no_global_error() {
        let outcome = check("", "", "");
        assert!(outcome.global_error.is_none());
        assert!(outcome.field_errors.contains_key("name"));
        assert!(outcome.field_errors.contains_key("email"));
        assert!(outcome.field_errors.contains_key("message"));
    }

    #[test]
    fn test_name_errors() {
        let long_name = "n".repeat(101);
        for name in ["", " ", long_name.as_str()] {
            let outcome = check(name, "test@example.com", "This is a test message.");
            assert_eq!(
                outcome.field_errors.get("name").map(String::as_str),
                Some("name must be between 1 and 100 characters")
            );
            assert_eq!(outcome.field_errors.len(), 1);
        }

        let outcome = check("Valid Name", "test@example.com", "This is a test message.");
        assert!(!outcome.field_errors.contains_key("name"));
    }

    #[test]
    fn test_message_errors_keep_observed_text() {
        let long_message = "m".repeat(1001);
        for message in ["", " ", long_message.as_str()] {
            let outcome = check("Gavin Thomas", "test@example.com", message);
            assert_eq!(
                outcome.field_errors.get("message").map(String::as_str),
                Some("message must be between 1 and 100 characters")
            );
        }

        let outcome = check("Gavin Thomas", "test@example.com", &"m".repeat(1000));
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_email_errors() {
        for email in ["", " ", "bad-example", "bad-example.com", "a@b@example.com", "<test@example.com"] {
            let outcome = check("Gavin Thomas", email, "Valid Message");
            assert_eq!(
                outcome.field_errors.get("email").map(String::as_str),
                Some("email must be a valid email address"),
                "email {:?}",
                email
            );
        }

        assert!(check("Gavin Thomas", "test@example.com", "Valid Message").is_valid());
    }

    #[test]
    fn test_email_accepts_mail_address_forms() {
        for email in [
            "test@example.com ",
            " test@example.com",
            "Gavin Thomas <test@example.com>",
            "<test@example.com>",
            "\"john doe\"@example.com",
            "jöhn@example.com",
        ] {
            let outcome = check("Gavin", email, "hi");
            assert!(outcome.is_valid(), "email {:?}: {:?}", email, outcome.field_errors);
        }
    }

    #[test]
    fn test_length_checks_ignore_surrounding_whitespace() {
        let padded = format!("   {}   ", "n".repeat(100));
        assert!(check(&padded, "test@example.com", "hi").is_valid());
    }
}
