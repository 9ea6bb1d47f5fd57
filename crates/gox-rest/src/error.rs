//! Error types for REST API operations

use gox_auth::AuthError;
use gox_types::TypesError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// No endpoint exists for this command/currency combination
    #[error("Unsupported command '{command}' for currency '{currency}'")]
    UnsupportedCommand {
        /// Command as requested
        command: String,
        /// Currency code as requested
        currency: String,
    },

    /// Connection, IO or timeout failure
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response did not match the envelope or payload schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Server answered with an error envelope
    ///
    /// Renders exactly as `<token>: <message>`; an absent token renders empty.
    #[error("{token}: {message}")]
    Protocol {
        /// Machine-readable error token (may be empty)
        token: String,
        /// Error text from the server
        message: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials or signing failed
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Broad classification of a [`RestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedCommand,
    Transport,
    Decode,
    Protocol,
    /// Caller-side problem detected before any request was sent
    Usage,
}

impl RestError {
    /// Build a protocol error from envelope fields
    pub fn protocol(token: Option<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            token: token.unwrap_or_default(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedCommand { .. } => ErrorKind::UnsupportedCommand,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Protocol { .. } => ErrorKind::Protocol,
            Self::AuthRequired | Self::Auth(_) | Self::InvalidParameter(_) | Self::Config(_) => {
                ErrorKind::Usage
            }
        }
    }

    /// Returns true for connection/IO failures
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Returns true if the server rejected the request
    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }

    /// Error token reported by the server, if any
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Protocol { token, .. } if !token.is_empty() => Some(token.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Transport(Box::new(err))
        } else {
            Self::Decode(err.to_string())
        }
    }
}

impl From<TypesError> for RestError {
    fn from(err: TypesError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
