//! Request tracing layer

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::{
    classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier},
    trace::{DefaultOnBodyChunk, DefaultOnEos, DefaultOnRequest, MakeSpan, OnFailure, OnResponse, TraceLayer},
};
use tracing::{info_span, Span};

/// Wraps every request in an `http_request` span; the span carries the
/// method and path, so only the outcome is logged.
pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    DefaultOnRequest,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "http_request",
                request_id = %uuid::Uuid::new_v4(),
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
            let status = response.status().as_u16();
            let latency_ms = latency.as_millis();

            match response.status() {
                s if s.is_server_error() => {
                    tracing::error!(status, latency_ms, "contact request failed")
                }
                s if s.is_client_error() => {
                    tracing::warn!(status, latency_ms, "contact request rejected")
                }
                _ => tracing::info!(status, latency_ms, "contact request completed"),
            }
        })
        .on_failure(
            |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(latency_ms = latency.as_millis(), error = ?error, "request failed");
            },
        )
}
