//! JSON extractor that answers malformed submissions in the contact form's
//! own response shape

use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::models::ContactFormResponse;
use crate::validation::INVALID_REQUEST_TYPE;

pub struct ContactJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ContactJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ContactJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ContactJson(value)),
            Err(rejection) => Err(ContactJsonRejection::from(rejection)),
        }
    }
}

#[derive(Debug)]
pub enum ContactJsonRejection {
    MissingContentType,
    InvalidJson(String),
    InvalidShape(String),
    Other(String),
}

impl From<JsonRejection> for ContactJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ContactJsonRejection::MissingContentType,
            JsonRejection::JsonSyntaxError(err) => ContactJsonRejection::InvalidJson(err.body_text()),
            JsonRejection::JsonDataError(err) => ContactJsonRejection::InvalidShape(err.body_text()),
            other => ContactJsonRejection::Other(other.body_text()),
        }
    }
}

impl IntoResponse for ContactJsonRejection {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected contact form request: {}", self);
        ContactFormResponse::validation_failure(Some(INVALID_REQUEST_TYPE.to_string()), &BTreeMap::new())
            .into_response()
    }
}

impl std::fmt::Display for ContactJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactJsonRejection::MissingContentType => write!(f, "Missing JSON content type"),
            ContactJsonRejection::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
            ContactJsonRejection::InvalidShape(msg) => write!(f, "Unexpected JSON shape: {}", msg),
            ContactJsonRejection::Other(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for ContactJsonRejection {}
