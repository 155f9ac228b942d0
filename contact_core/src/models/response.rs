//! Response shapes returned by the contact form endpoint

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SUCCESS_MESSAGE: &str = "success";
pub const ERROR_MESSAGE: &str = "error";
pub const INTERNAL_FAILURE_MESSAGE: &str = "Unexpected error occurred. Please try again later.";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    ValidationFailure,
    InternalFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: JSON_CONTENT_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

/// The outcome of a contact form submission, ready to be written to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormResponse {
    #[serde(skip)]
    pub status: ResponseStatus,
    pub status_code: u16,
    pub headers: ResponseHeaders,
    pub body: ResponseBody,
}

impl ContactFormResponse {
    pub fn success() -> Self {
        Self::base(ResponseStatus::Success, StatusCode::OK, ResponseBody {
            message: SUCCESS_MESSAGE.to_string(),
            ..Default::default()
        })
    }

    pub fn validation_failure(
        global_error: Option<String>,
        field_errors: &BTreeMap<String, String>,
    ) -> Self {
        Self::base(
            ResponseStatus::ValidationFailure,
            StatusCode::BAD_REQUEST,
            ResponseBody {
                message: ERROR_MESSAGE.to_string(),
                global_error_message: global_error.filter(|msg| !msg.is_empty()),
                field_errors: to_field_errors(field_errors),
            },
        )
    }

    /// Builds the opaque 500 response. The cause is logged and never leaves
    /// the process.
    pub fn internal_failure(cause: &str) -> Self {
        tracing::error!(cause = %cause, "contact form internal failure");
        Self::base(
            ResponseStatus::InternalFailure,
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseBody {
                message: ERROR_MESSAGE.to_string(),
                global_error_message: Some(INTERNAL_FAILURE_MESSAGE.to_string()),
                field_errors: Vec::new(),
            },
        )
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn base(status: ResponseStatus, code: StatusCode, body: ResponseBody) -> Self {
        Self {
            status,
            status_code: code.as_u16(),
            headers: ResponseHeaders::default(),
            body,
        }
    }
}

fn to_field_errors(errors: &BTreeMap<String, String>) -> Vec<FieldError> {
    errors
        .iter()
        .map(|(field, message)| FieldError {
            field: field.clone(),
            error_message: message.clone(),
        })
        .collect()
}

impl IntoResponse for ContactFormResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let content_type = HeaderValue::from_str(&self.headers.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut response = (status, Json(self.body)).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
        response
    }
}
