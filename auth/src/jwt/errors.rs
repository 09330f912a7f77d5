use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Signing secret is missing")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    MalformedToken(String),

    #[error("Token is expired")]
    TokenExpired,
}

impl JwtError {
    /// True for faults on the signing side (bad or absent key material),
    /// as opposed to a bad token presented by a caller.
    pub fn is_signing_fault(&self) -> bool {
        matches!(self, JwtError::MissingSecret | JwtError::EncodingFailed(_))
    }
}
