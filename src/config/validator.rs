use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_logging(&settings.logging) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if server.host.trim().is_empty() {
            errors.push(ConfigError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<(), Vec<ConfigError>> {
        match EnvFilter::try_new(&logging.level) {
            Ok(_) => Ok(()),
            Err(e) => Err(vec![ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: e.to_string(),
            }]),
        }
    }
}
