//! Application error types and handling

use thiserror::Error;

use crate::mailer::MailerError;
use crate::models::ContactFormResponse;
use crate::validation::ValidationOutcome;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Mailer error: {0}")]
    Mailer(#[from] MailerError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Why a contact form submission did not go through.
#[derive(Error, Debug)]
pub enum ContactFormError {
    #[error("configuration is invalid")]
    Configuration,

    #[error("{0} is invalid")]
    Wiring(&'static str),

    #[error("submission failed validation")]
    Validation(ValidationOutcome),

    #[error(transparent)]
    Delivery(#[from] MailerError),
}

impl From<ContactFormError> for ContactFormResponse {
    fn from(err: ContactFormError) -> Self {
        match err {
            ContactFormError::Validation(outcome) => {
                ContactFormResponse::validation_failure(outcome.global_error, &outcome.field_errors)
            }
            other => ContactFormResponse::internal_failure(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ResponseStatus, INTERNAL_FAILURE_MESSAGE};

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactFormError::Configuration.to_string(), "configuration is invalid");
        assert_eq!(ContactFormError::Wiring("validator").to_string(), "validator is invalid");
        assert_eq!(ContactFormError::Wiring("mailer").to_string(), "mailer is invalid");
    }

    #[test]
    fn test_only_validation_errors_expose_detail() {
        let mut outcome = ValidationOutcome::success();
        outcome.add_field_error("email", "email must be a valid email address");

        let response = ContactFormResponse::from(ContactFormError::Validation(outcome));
        assert_eq!(response.status, ResponseStatus::ValidationFailure);
        assert_eq!(response.body.field_errors.len(), 1);

        let response = ContactFormResponse::from(ContactFormError::Delivery(
            MailerError::Rejected {
                status: 401,
                body: "secret provider detail".to_string(),
            },
        ));
        assert_eq!(response.status, ResponseStatus::InternalFailure);
        assert_eq!(
            response.body.global_error_message.as_deref(),
            Some(INTERNAL_FAILURE_MESSAGE)
        );
    }
}
