//! Core library for the contact form service: validation, response shaping,
//! mail delivery and the HTTP routes that tie them together.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validation;

pub use crate::config::{AppConfig, ContactFormConfiguration};
pub use error::{AppError, ContactFormError, Result};
pub use handlers::routes::create_routes;
pub use mailer::{Mailer, MailerError, SendGridMailer};
pub use models::{ContactFormRequest, ContactFormResponse, FieldError, ResponseStatus};
pub use services::ContactForm;
pub use validation::{ContactFormValidator, ValidationOutcome, Validator};

use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub contact_form: ContactForm,
}

impl AppState {
    pub fn new(contact_form: ContactForm) -> Self {
        Self {
            app_name: "Contact Form Service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_form,
        }
    }

    /// Builds state with the real validator and SendGrid mailer.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(ContactForm::from_config(config)?))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
