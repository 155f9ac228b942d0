use crate::{
    config::{AppConfig, ContactFormConfiguration},
    error::ContactFormError,
    mailer::{Mailer, MailerError, SendGridMailer},
    models::{ContactFormRequest, ContactFormResponse},
    validation::{ContactFormValidator, Validator},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs a submission through configuration check, validation and delivery.
///
/// Collaborators are optional so that a half-wired instance reports an
/// internal failure instead of panicking.
#[derive(Clone)]
pub struct ContactForm {
    configuration: ContactFormConfiguration,
    validator: Option<Arc<dyn Validator>>,
    mailer: Option<Arc<dyn Mailer>>,
}

impl ContactForm {
    pub fn new(configuration: ContactFormConfiguration) -> Self {
        Self {
            configuration,
            validator: None,
            mailer: None,
        }
    }

    /// Wires the field validator and the SendGrid mailer from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, MailerError> {
        let mailer = SendGridMailer::new(&config.contact, &config.mail)?;
        Ok(Self::new(config.contact.clone())
            .with_validator(Arc::new(ContactFormValidator::new()))
            .with_mailer(Arc::new(mailer)))
    }

    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.configuration.valid() && self.validator.is_some() && self.mailer.is_some()
    }

    pub async fn execute(&self, request: ContactFormRequest) -> ContactFormResponse {
        match self.process(&request).await {
            Ok(()) => {
                info!("Contact form message delivered");
                ContactFormResponse::success()
            }
            Err(err) => err.into(),
        }
    }

    pub async fn process(&self, request: &ContactFormRequest) -> Result<(), ContactFormError> {
        if !self.configuration.valid() {
            debug!(configuration = ?self.configuration, "Contact form configuration rejected");
            return Err(ContactFormError::Configuration);
        }

        let validator = self
            .validator
            .as_ref()
            .ok_or(ContactFormError::Wiring("validator"))?;

        let outcome = validator.check(request);
        if !outcome.is_valid() {
            return Err(ContactFormError::Validation(outcome));
        }

        let mailer = self
            .mailer
            .as_ref()
            .ok_or(ContactFormError::Wiring("mailer"))?;

        mailer.send_email(request).await?;
        Ok(())
    }
}
