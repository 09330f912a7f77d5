use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::LoginCommand;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::models::SignupCommand;
use crate::domain::session::ports::SessionRepository;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for the session lifecycle.
///
/// Concrete implementation of SessionServicePort with dependency injection.
pub struct SessionService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    sessions: Arc<SR>,
    authenticator: Arc<Authenticator>,
}

impl<UR, SR> SessionService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - User directory implementation
    /// * `sessions` - Session record persistence implementation
    /// * `authenticator` - Hashing, issuing and validating tokens
    pub fn new(users: Arc<UR>, sessions: Arc<SR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            sessions,
            authenticator,
        }
    }

    /// Write the session record from a detached task.
    ///
    /// The write completes even if the caller's future is dropped; a
    /// caller still waiting sees its outcome.
    async fn persist(&self, user_id: UserId, tokens: &TokenPair) -> Result<(), SessionError> {
        let record = SessionRecord::new(user_id, tokens, Utc::now());
        let sessions = Arc::clone(&self.sessions);

        tokio::spawn(async move { sessions.upsert(record).await })
            .await
            .map_err(|e| SessionError::Unknown(format!("Session write task failed: {}", e)))?
    }
}

#[async_trait]
impl<UR, SR> SessionServicePort for SessionService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<(User, TokenPair), SessionError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            phone: command.phone,
            role: Role::default(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created_user = self.users.create(user).await?;

        let tokens = self.authenticator.issue_tokens(&created_user.subject())?;
        self.persist(created_user.id, &tokens).await?;

        tracing::info!(user_id = %created_user.id, "User signed up");

        Ok((created_user, tokens))
    }

    async fn login(&self, command: LoginCommand) -> Result<(User, TokenPair), SessionError> {
        let Some(user) = self.users.find_by_email(&command.email).await? else {
            tracing::debug!("Login rejected: unknown email");
            return Err(self.authenticator.reject_unknown(&command.password).into());
        };

        let tokens = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &user.subject())
            .map_err(|e| {
                let err = SessionError::from(e);
                if matches!(err, SessionError::InvalidCredentials) {
                    tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
                }
                err
            })?;

        self.persist(user.id, &tokens).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok((user, tokens))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        let claims = self.authenticator.validate_refresh_token(refresh_token)?;

        let user_id = UserId::from_string(&claims.sub)
            .map_err(|e| SessionError::MalformedToken(e.to_string()))?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| SessionError::MalformedToken("unknown subject".to_string()))?;

        let tokens = self.authenticator.issue_tokens(&user.subject())?;
        self.persist(user.id, &tokens).await?;

        tracing::info!(user_id = %user.id, "Session refreshed");

        Ok(tokens)
    }

    async fn authenticate(&self, access_token: &str) -> Result<Claims, SessionError> {
        Ok(self.authenticator.validate_access_token(access_token)?)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, SessionError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(SessionError::UserNotFound(id.to_string()))
    }
}
