//! Route table for the contact form service

use crate::{
    handlers::{contact::handle_contact_submit, health::handle_health},
    AppState,
};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/contact", post(handle_contact_submit))
        .route("/api/contact", post(handle_contact_submit))
}

async fn handle_root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "app": state.app_name,
        "version": state.version,
        "endpoints": {
            "health": "/health",
            "contact": "/contact",
        }
    }))
}
