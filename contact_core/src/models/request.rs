//! Inbound contact form submission

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::rules::{
    validate_email_address, validate_message_length, validate_name_length,
};

/// A single contact form submission as received from the caller.
///
/// Missing fields decode as empty strings so that they are reported as field
/// errors instead of failing the whole request at the JSON boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactFormRequest {
    #[serde(default)]
    #[validate(custom(
        function = "validate_name_length",
        message = "name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(
        function = "validate_email_address",
        message = "email must be a valid email address"
    ))]
    pub email: String,

    // The bound is 1..=1000 but the observed message has always said 100.
    #[serde(default)]
    #[validate(custom(
        function = "validate_message_length",
        message = "message must be between 1 and 100 characters"
    ))]
    pub message: String,
}

impl ContactFormRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}
