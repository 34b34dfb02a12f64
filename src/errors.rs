//! Error handling

use thiserror::Error;

/// Failures surfaced by client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required input was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The service could not be reached, or replied with nothing usable.
    #[error("service error: {message}")]
    Service {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service replied, but the body was not the expected JSON shape.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Error while encoding a request
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Service failure with no underlying cause.
    pub fn service(message: impl Into<String>) -> Self {
        ClientError::Service {
            message: message.into(),
            source: None,
        }
    }

    /// Service failure wrapping the underlying cause.
    pub fn service_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ClientError::Service {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Decode failure with no parser cause.
    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Decode failure carrying the parser's cause.
    pub fn decode_with(message: impl Into<String>, source: serde_json::Error) -> Self {
        ClientError::Decode {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Whether this is a caller-input failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ClientError::InvalidArgument(_))
    }

    /// Whether this is a transport-or-empty-reply failure.
    pub fn is_service(&self) -> bool {
        matches!(self, ClientError::Service { .. })
    }

    /// Whether this is a malformed-reply failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }

    /// Whether this is a construction-time configuration failure.
    pub fn is_config(&self) -> bool {
        matches!(self, ClientError::Config(_))
    }
}
