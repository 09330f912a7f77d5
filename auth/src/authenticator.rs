use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::issuer::Subject;
use crate::issuer::TokenIssuer;
use crate::issuer::TokenPair;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenType;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification, token
/// issuance and token validation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with default token lifetimes.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        let jwt_handler = JwtHandler::new(jwt_secret)?;

        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_handler.clone()),
            jwt_handler,
        })
    }

    /// Override access and refresh token lifetimes.
    pub fn with_token_ttls(mut self, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        self.token_issuer =
            TokenIssuer::with_ttls(self.jwt_handler.clone(), access_ttl, refresh_ttl);
        self
    }

    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &Subject,
    ) -> Result<TokenPair, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue_pair(subject)?)
    }

    /// Spend one password hash on a login attempt that has no stored digest.
    ///
    /// Hashing and verifying run the same Argon2 parameters, so an unknown
    /// identity costs about as much as a wrong password.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.hash(password);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a token pair without password verification.
    ///
    /// Used at signup and on refresh, where the caller has already been
    /// established by other means.
    pub fn issue_tokens(&self, subject: &Subject) -> Result<TokenPair, JwtError> {
        self.token_issuer.issue_pair(subject)
    }

    /// Validate an access token against the current time.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_access_token_at(token, Utc::now())
    }

    /// Validate an access token as of `now`. Refresh tokens are rejected.
    pub fn validate_access_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, JwtError> {
        self.validate_at(token, TokenType::Access, now)
    }

    /// Validate a refresh token against the current time.
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_refresh_token_at(token, Utc::now())
    }

    /// Validate a refresh token as of `now`. Access tokens are rejected.
    pub fn validate_refresh_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Claims, JwtError> {
        self.validate_at(token, TokenType::Refresh, now)
    }

    fn validate_at(
        &self,
        token: &str,
        expected: TokenType,
        now: DateTime<Utc>,
    ) -> Result<Claims, JwtError> {
        let claims = self.jwt_handler.decode_at(token, now)?;

        if claims.token_type != expected {
            return Err(JwtError::MalformedToken(format!(
                "expected {} token, got {}",
                expected, claims.token_type
            )));
        }

        Ok(claims)
    }
}
