use std::env;

use crate::errors::AdapterError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `AdapterError::Config` if `LOG_FORMAT` holds an unknown value.
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_vars(env::var("LOG_LEVEL").ok(), env::var("LOG_FORMAT").ok())
    }

    /// Builds the config from already-read variable values.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Config` if `log_format` is neither `json` nor `text`.
    pub fn from_vars(
        log_level: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, AdapterError> {
        let defaults = Self::default();

        let log_format = match log_format.as_deref().map(str::trim) {
            None | Some("") => defaults.log_format,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(other) => {
                return Err(AdapterError::Config(format!(
                    "LOG_FORMAT: expected `json` or `text`, got `{other}`"
                )));
            }
        };

        Ok(Self {
            log_level: log_level
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_format,
        })
    }
}
