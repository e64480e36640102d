//! Error handling for the monitoring API client models.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Decoding a model payload can
//! fail in exactly two ways: the bytes are not a JSON object
//! ([`Error::MalformedPayload`]) or a required property is absent
//! ([`Error::MissingRequiredField`]). Payloads that are valid JSON but do not
//! fit the declared shape are not errors; they decode into an unparsed record.
//!
//! # Examples
//!
//! ```
//! use monitor_api_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::MissingRequiredField("title".to_string()))
//! }
//!
//! assert!(matches!(might_fail(), Err(Error::MissingRequiredField(_))));
//! ```

use thiserror::Error;

/// Result type for model codec and schema operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for model codec and schema operations
#[derive(Debug, Error)]
pub enum Error {
    /// Payload is not valid JSON, or not a JSON object
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Payload is valid JSON but omits a mandatory property (wire name)
    #[error("required field {0} missing")]
    MissingRequiredField(String),

    /// JSON encoding error
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// OpenAPI error
    #[error("OpenAPI error: {0}")]
    OpenApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new OpenAPI error
    pub fn openapi<S: Into<String>>(msg: S) -> Self {
        Self::OpenApi(msg.into())
    }

    /// Create a new missing-required-field error
    pub fn missing_field<S: Into<String>>(wire_name: S) -> Self {
        Self::MissingRequiredField(wire_name.into())
    }

    /// Whether this error came out of decoding a model payload
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPayload(_) | Self::MissingRequiredField(_)
        )
    }
}
