//! Error types for token acquisition operations

/// Errors from token acquisition operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("no auth_code parameter in redirect URL")]
    MissingAuthCode,

    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("profile fetch failed: {0}")]
    ProfileFetch(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result alias for token acquisition operations.
pub type Result<T> = std::result::Result<T, Error>;
