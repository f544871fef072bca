use std::fmt;
use thiserror::Error;

/// Error produced while converting a string map into a bound shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
    missing_field: Option<&'static str>,
}

impl DecodeError {
    /// The field serde reported as absent, when that is what failed.
    #[must_use]
    pub fn missing_field_name(&self) -> Option<&'static str> {
        self.missing_field
    }
}

impl serde::de::Error for DecodeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self {
            message: msg.to_string(),
            missing_field: None,
        }
    }

    fn missing_field(field: &'static str) -> Self {
        Self {
            message: format!("missing field `{field}`"),
            missing_field: Some(field),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failed to decode request body: {0}")]
    Body(#[source] serde_json::Error),

    #[error("Failed to decode request headers: {0}")]
    Headers(#[source] DecodeError),

    #[error("Failed to decode path parameters: {0}")]
    PathParameters(#[source] DecodeError),

    #[error("Failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AdapterError {
    /// True for the errors raised while decoding the inbound event.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AdapterError::Body(_) | AdapterError::Headers(_) | AdapterError::PathParameters(_)
        )
    }
}
