use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Which half of a token pair a claim set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => f.write_str("access"),
            TokenType::Refresh => f.write_str("refresh"),
        }
    }
}

/// Claim set signed into every token.
///
/// Access tokens carry the full identity snapshot. Refresh tokens carry only
/// `sub`; the descriptive fields are empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Authorization marker for downstream handlers, not enforced by this crate
    #[serde(default)]
    pub role: String,

    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for a refresh token: subject only.
    pub fn refresh(sub: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: sub.to_string(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: String::new(),
            token_type: TokenType::Refresh,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Claims for an access token. Identity fields are set with the `with_*` builders.
    pub fn access(sub: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token_type: TokenType::Access,
            ..Self::refresh(sub, issued_at, ttl)
        }
    }

    /// Set email.
    pub fn with_email(mut self, email: impl ToString) -> Self {
        self.email = email.to_string();
        self
    }

    /// Set first and last name.
    pub fn with_names(mut self, first_name: impl ToString, last_name: impl ToString) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    /// Set role marker.
    pub fn with_role(mut self, role: impl ToString) -> Self {
        self.role = role.to_string();
        self
    }

    /// Expiration as a timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if token is expired. A token is dead from the second `exp` is reached.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
