//! Postgres storage for accounts and sessions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portcullis_core::{CredentialId, SessionId, UserId};
use portcullis_identity::{
    AccountStore, Email, PasswordCredential, Session, SessionStore, StoreError, User,
};
use rootcause::prelude::Report;
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row type for user queries.
#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, Report<StoreError>> {
        let id = parse_id::<UserId>("user id", &self.id)?;
        let email = Email::parse(&self.email).map_err(|e| StoreError::Corrupt {
            details: format!("invalid email for user '{}': {}", self.id, e),
        })?;
        Ok(User::with_all_fields(
            id,
            email,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Row type for credential queries.
#[derive(FromRow)]
struct CredentialRow {
    id: String,
    user_id: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CredentialRow {
    fn try_into_credential(self) -> Result<PasswordCredential, Report<StoreError>> {
        Ok(PasswordCredential::with_all_fields(
            parse_id::<CredentialId>("credential id", &self.id)?,
            parse_id::<UserId>("user id", &self.user_id)?,
            self.password_hash,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Row type for session queries.
#[derive(FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    token_digest: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    rotated_at: Option<DateTime<Utc>>,
}

impl SessionRow {
    fn try_into_session(self) -> Result<Session, Report<StoreError>> {
        Ok(Session::with_all_fields(
            parse_id::<SessionId>("session id", &self.id)?,
            parse_id::<UserId>("user id", &self.user_id)?,
            self.token_digest,
            self.created_at,
            self.expires_at,
            self.rotated_at,
        ))
    }
}

fn parse_id<T>(what: &str, raw: &str) -> Result<T, Report<StoreError>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(raw).map_err(|e| {
        StoreError::Corrupt {
            details: format!("invalid {what} '{raw}': {e}"),
        }
        .into()
    })
}

fn backend(e: sqlx::Error) -> Report<StoreError> {
    StoreError::Backend {
        details: e.to_string(),
    }
    .into()
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Account and session storage backed by Postgres.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create_account(
        &self,
        user: &User,
        credential: &PasswordCredential,
    ) -> Result<(), Report<StoreError>> {
        let mut tx = self.pool.begin().await.map_err(backend)?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (id, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id().to_string())
        .bind(user.email().as_str())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            if is_unique_violation(&e) {
                return Err(StoreError::Conflict {
                    entity: "user",
                    key: user.email().to_string(),
                }
                .into());
            }
            return Err(backend(e));
        }

        sqlx::query(
            r#"
            INSERT INTO password_credentials (id, user_id, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(credential.id().to_string())
        .bind(credential.user_id().to_string())
        .bind(credential.password_hash())
        .bind(credential.created_at())
        .bind(credential.updated_at())
        .execute(&mut *tx)
        .await
        .map_err(backend)?;

        tx.commit().await.map_err(backend)?;
        Ok(())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, Report<StoreError>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, Report<StoreError>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn find_credential(
        &self,
        user_id: UserId,
    ) -> Result<Option<PasswordCredential>, Report<StoreError>> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, password_hash, created_at, updated_at
            FROM password_credentials
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(CredentialRow::try_into_credential).transpose()
    }
}

#[async_trait]
impl SessionStore for PgStore {
    async fn insert_session(&self, session: &Session) -> Result<(), Report<StoreError>> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, token_digest, created_at, expires_at, rotated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id().to_string())
        .bind(session.user_id().to_string())
        .bind(session.token_digest())
        .bind(session.created_at())
        .bind(session.expires_at())
        .bind(session.rotated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Conflict {
                    entity: "session",
                    key: session.id().to_string(),
                }
                .into()
            } else {
                backend(e)
            }
        })?;

        Ok(())
    }

    async fn find_session_by_digest(
        &self,
        token_digest: &str,
    ) -> Result<Option<Session>, Report<StoreError>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, token_digest, created_at, expires_at, rotated_at
            FROM sessions
            WHERE token_digest = $1
            "#,
        )
        .bind(token_digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(SessionRow::try_into_session).transpose()
    }

    async fn update_session(&self, session: &Session) -> Result<(), Report<StoreError>> {
        let result = sqlx::query(
            r#"
            UPDATE sessions
            SET token_digest = $2, expires_at = $3, rotated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(session.id().to_string())
        .bind(session.token_digest())
        .bind(session.expires_at())
        .bind(session.rotated_at())
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Backend {
                details: format!("session '{}' does not exist", session.id()),
            }
            .into());
        }
        Ok(())
    }

    async fn delete_session(&self, id: SessionId) -> Result<(), Report<StoreError>> {
        sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(())
    }

    async fn delete_expired_sessions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, Report<StoreError>> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE expires_at <= $1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        Ok(result.rows_affected())
    }
}
