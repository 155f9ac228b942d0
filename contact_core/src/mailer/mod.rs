//! Delivery of validated submissions to the mail transport

pub mod sendgrid;

pub use sendgrid::{SendGridMailer, SendGridMessage, ACCEPTED_SEND_STATUS_CODES};

use crate::models::ContactFormRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("error sending email: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error sending email: status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a validated submission on to its recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, request: &ContactFormRequest) -> Result<(), MailerError>;
}
