//! Health check handler

use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use tracing::{debug, info};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /health");

    let mailer_configured = state.contact_form.is_configured();
    if !mailer_configured {
        debug!("Contact form is not fully configured");
    }

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "version": state.version,
        "mailer_configured": mailer_configured,
    }))
}
