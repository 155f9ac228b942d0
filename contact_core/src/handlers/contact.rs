//! Contact form submission handler

use crate::{
    extractors::ContactJson,
    models::{ContactFormRequest, ContactFormResponse},
    AppState,
};
use axum::extract::{OriginalUri, State};
use tracing::info;

pub async fn handle_contact_submit(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ContactJson(request): ContactJson<ContactFormRequest>,
) -> ContactFormResponse {
    info!(path = %uri.path(), "Processing contact form submission");
    state.contact_form.execute(request).await
}
