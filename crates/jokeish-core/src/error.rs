//! Error Types

use thiserror::Error;

/// Result type alias for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors an [`AuthTrigger`](crate::AuthTrigger) can report
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The identity provider URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The runtime lacks what the trigger needs (e.g. no browser window)
    #[error("Trigger unavailable: {0}")]
    Unavailable(String),

    /// Navigation to the identity provider was rejected
    #[error("Redirect failed: {0}")]
    Redirect(String),
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
