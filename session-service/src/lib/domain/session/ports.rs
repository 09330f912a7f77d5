use async_trait::async_trait;
use auth::Claims;
use auth::TokenPair;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for session lifecycle operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Register a user and open their first session.
    ///
    /// # Arguments
    /// * `command` - Validated command with email, names, phone and password
    ///
    /// # Returns
    /// Created user and the issued token pair
    ///
    /// # Errors
    /// * `User(EmailAlreadyExists | PhoneAlreadyExists)` - Duplicate identity
    /// * `Password` - Hashing failed
    /// * `Signing` - Token issuance failed
    /// * `StoreUnavailable` - Session record could not be written
    async fn signup(&self, command: SignupCommand) -> Result<(User, TokenPair), SessionError>;

    /// Verify credentials and rotate the user's session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `StoreUnavailable` - Session record could not be written
    async fn login(&self, command: LoginCommand) -> Result<(User, TokenPair), SessionError>;

    /// Exchange a refresh token for a fresh pair.
    ///
    /// The presented token is not compared with the stored one.
    ///
    /// # Errors
    /// * `MalformedToken` - Bad signature, wrong token type or unknown subject
    /// * `TokenExpired` - Refresh token lifetime elapsed
    /// * `StoreUnavailable` - Session record could not be written
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError>;

    /// Validate an access token and return its claims.
    ///
    /// Never touches the session store.
    ///
    /// # Errors
    /// * `MalformedToken` - Bad signature or wrong token type
    /// * `TokenExpired` - Access token lifetime elapsed
    async fn authenticate(&self, access_token: &str) -> Result<Claims, SessionError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    async fn get_user(&self, id: &UserId) -> Result<User, SessionError>;
}

/// Persistence of the latest session record per user.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Insert or overwrite the record for `record.user_id`.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store unreachable or write timed out
    async fn upsert(&self, record: SessionRecord) -> Result<(), SessionError>;

    /// Retrieve the current record for a user, if any.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store unreachable or read timed out
    async fn find_by_user_id(&self, user_id: &UserId)
        -> Result<Option<SessionRecord>, SessionError>;
}
