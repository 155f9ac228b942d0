pub mod settings;

pub use settings::{AppConfig, ContactFormConfiguration, CorsConfig, MailConfig, ServerConfig};
