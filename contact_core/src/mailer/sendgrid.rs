//! SendGrid v3 mail-send client

use super::{Mailer, MailerError};
use crate::config::{ContactFormConfiguration, MailConfig};
use crate::models::ContactFormRequest;
use crate::validation::rules::parse_mail_address;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

pub const ACCEPTED_SEND_STATUS_CODES: [u16; 2] = [200, 202];

const SEND_PATH: &str = "/v3/mail/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailAddress {
    fn new(name: &str, email: &str) -> Self {
        let name = name.trim();
        Self {
            email: email.trim().to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

/// Request body for `POST /v3/mail/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendGridMessage {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub reply_to: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
}

#[derive(Clone)]
pub struct SendGridMailer {
    client: reqwest::Client,
    api_key: String,
    send_url: String,
    from: EmailAddress,
    to: EmailAddress,
    subject: String,
}

impl SendGridMailer {
    pub fn new(
        configuration: &ContactFormConfiguration,
        mail: &MailConfig,
    ) -> Result<Self, MailerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(mail.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: configuration.sendgrid_api_key.clone(),
            send_url: format!("{}{}", mail.sendgrid_base_url.trim_end_matches('/'), SEND_PATH),
            from: EmailAddress::new(
                &format!("{} Contact Form", mail.website_url),
                &mail.contact_address,
            ),
            to: EmailAddress::new(&mail.recipient_name, &mail.contact_address),
            subject: format!("Contact Message from {}", mail.website_url),
        })
    }

    pub fn build_message(&self, request: &ContactFormRequest) -> SendGridMessage {
        SendGridMessage {
            personalizations: vec![Personalization {
                to: vec![self.to.clone()],
            }],
            from: self.from.clone(),
            reply_to: Self::reply_to(request),
            subject: self.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: request.message.clone(),
            }],
        }
    }

    /// The submitter's bare address, so `Name <addr>` input still yields a
    /// reply-to SendGrid accepts.
    fn reply_to(request: &ContactFormRequest) -> EmailAddress {
        match parse_mail_address(&request.email) {
            Some(address) => EmailAddress::new(
                if request.name.trim().is_empty() {
                    address.display_name.unwrap_or_default()
                } else {
                    &request.name
                },
                address.addr_spec,
            ),
            None => EmailAddress::new(&request.name, &request.email),
        }
    }

    pub fn is_accepted_status_code(status: u16) -> bool {
        ACCEPTED_SEND_STATUS_CODES.contains(&status)
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send_email(&self, request: &ContactFormRequest) -> Result<(), MailerError> {
        let message = self.build_message(request);

        let response = self
            .client
            .post(&self.send_url)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                warn!("Error sending email: {}", e);
                MailerError::Transport(e)
            })?;

        let status = response.status().as_u16();
        if !Self::is_accepted_status_code(status) {
            let body = response.text().await.unwrap_or_default();
            warn!(status, body = %body, "SendGrid rejected email");
            return Err(MailerError::Rejected { status, body });
        }

        info!(status, "Contact email accepted by SendGrid");
        Ok(())
    }
}
