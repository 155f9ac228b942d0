use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

pub const SENDGRID_API_KEY_ENV: &str = "SENDGRID_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
    pub contact: ContactFormConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Fixed identities and endpoint used when relaying submissions to SendGrid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub sendgrid_base_url: String,
    pub contact_address: String,
    pub website_url: String,
    pub recipient_name: String,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Credentials for the mail transport.
///
/// A blank key does not stop the server from starting; every submission is
/// answered with an internal failure until a key is supplied.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ContactFormConfiguration {
    pub sendgrid_api_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sendgrid_base_url: "https://api.sendgrid.com".to_string(),
            contact_address: "contact@ippoippophotography.com".to_string(),
            website_url: "https://ippoippophotography.com".to_string(),
            recipient_name: "ippoippo Photography".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "https://ippoippophotography.com".to_string(),
                "https://www.ippoippophotography.com".to_string(),
                "http://localhost:1313".to_string(),
            ],
        }
    }
}

impl ContactFormConfiguration {
    pub fn new(sendgrid_api_key: impl Into<String>) -> Self {
        Self {
            sendgrid_api_key: sendgrid_api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_var(SENDGRID_API_KEY_ENV)
    }

    pub fn from_var(name: &str) -> Self {
        Self::new(std::env::var(name).unwrap_or_default())
    }

    pub fn valid(&self) -> bool {
        !self.sendgrid_api_key.trim().is_empty()
    }
}

impl fmt::Debug for ContactFormConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.sendgrid_api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("ContactFormConfiguration")
            .field("sendgrid_api_key", &key)
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let file = Path::new("config.toml");
        Self::load_from(file.exists().then_some(file))
    }

    /// Layers defaults, an optional TOML file and `APP_` environment variables.
    /// Nested keys are joined with `__`, e.g. `APP_SERVER__PORT=8080`.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        if !app_config.contact.valid() {
            app_config.contact = ContactFormConfiguration::from_env();
        }

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.mail.sendgrid_base_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "SendGrid base URL cannot be empty".to_string(),
            ));
        }

        if self.mail.contact_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "Contact address cannot be empty".to_string(),
            ));
        }

        if self.mail.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Mail request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
