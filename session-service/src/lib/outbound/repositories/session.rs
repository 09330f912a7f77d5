use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::SessionRecord;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::UserId;

/// Session records in Postgres, one row per user.
///
/// Every call is bounded by `timeout`; running out of time or losing the
/// connection is reported as `StoreUnavailable`.
pub struct PostgresSessionRepository {
    pool: PgPool,
    timeout: Duration,
}

impl PostgresSessionRepository {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(pool: PgPool) -> Self {
        Self::with_timeout(pool, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, SessionError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => result.map_err(|e| SessionError::StoreUnavailable(e.to_string())),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Session store call timed out"
                );
                Err(SessionError::StoreUnavailable(format!(
                    "no response within {:?}",
                    self.timeout
                )))
            }
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    user_id: Uuid,
    access_token: String,
    refresh_token: String,
    updated_at: DateTime<Utc>,
}

impl From<SessionRow> for SessionRecord {
    fn from(r: SessionRow) -> Self {
        SessionRecord {
            user_id: UserId(r.user_id),
            access_token: r.access_token,
            refresh_token: r.refresh_token,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn upsert(&self, record: SessionRecord) -> Result<(), SessionError> {
        let query = sqlx::query(
            r#"
            INSERT INTO sessions (user_id, access_token, refresh_token, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(record.user_id.0)
        .bind(&record.access_token)
        .bind(&record.refresh_token)
        .bind(record.updated_at)
        .execute(&self.pool);

        self.bounded(query).await?;

        tracing::debug!(user_id = %record.user_id, "Session record written");

        Ok(())
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SessionRecord>, SessionError> {
        let query = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT user_id, access_token, refresh_token, updated_at
            FROM sessions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool);

        let row = self.bounded(query).await?;

        Ok(row.map(SessionRecord::from))
    }
}
