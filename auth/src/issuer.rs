use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Identity fields a token pair is minted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

/// Access and refresh token returned to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints access/refresh token pairs.
///
/// Issuance is pure: persisting the pair is the caller's job.
#[derive(Clone)]
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 30;
    pub const DEFAULT_REFRESH_TTL_HOURS: i64 = 24;

    /// Create an issuer with the default lifetimes (30 minutes / 24 hours).
    pub fn new(jwt_handler: JwtHandler) -> Self {
        Self::with_ttls(
            jwt_handler,
            Duration::minutes(Self::DEFAULT_ACCESS_TTL_MINUTES),
            Duration::hours(Self::DEFAULT_REFRESH_TTL_HOURS),
        )
    }

    pub fn with_ttls(jwt_handler: JwtHandler, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            jwt_handler,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Issue a pair stamped with the current time.
    pub fn issue_pair(&self, subject: &Subject) -> Result<TokenPair, JwtError> {
        self.issue_pair_at(subject, Utc::now())
    }

    /// Issue a pair stamped with `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing either token failed
    pub fn issue_pair_at(
        &self,
        subject: &Subject,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, JwtError> {
        let access_claims = Claims::access(&subject.id, now, self.access_ttl)
            .with_email(&subject.email)
            .with_names(&subject.first_name, &subject.last_name)
            .with_role(&subject.role);
        let refresh_claims = Claims::refresh(&subject.id, now, self.refresh_ttl);

        Ok(TokenPair {
            access_token: self.jwt_handler.encode(&access_claims)?,
            refresh_token: self.jwt_handler.encode(&refresh_claims)?,
        })
    }
}
