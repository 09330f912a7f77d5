use auth::AuthenticationError;
use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::user::errors::UserError;

/// Top-level error for signup, login, refresh and token checks
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Returned for both an unknown email and a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("missing token")]
    MissingToken,

    /// The reason is kept for logs and never rendered.
    #[error("the token is invalid")]
    MalformedToken(String),

    #[error("the token is expired")]
    TokenExpired,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<JwtError> for SessionError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MalformedToken(reason) => SessionError::MalformedToken(reason),
            JwtError::TokenExpired => SessionError::TokenExpired,
            JwtError::MissingSecret | JwtError::EncodingFailed(_) => {
                SessionError::Signing(err.to_string())
            }
        }
    }
}

impl From<AuthenticationError> for SessionError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => SessionError::InvalidCredentials,
            AuthenticationError::PasswordError(e) => SessionError::Password(e),
            AuthenticationError::JwtError(e) => SessionError::from(e),
        }
    }
}
