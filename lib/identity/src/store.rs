//! Storage traits for accounts and sessions.
//!
//! The identity core never talks to a database directly. The server provides
//! Postgres implementations; [`MemoryStore`](crate::MemoryStore) backs tests
//! and local development.

use crate::credential::PasswordCredential;
use crate::error::StoreError;
use crate::session::Session;
use crate::user::{Email, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portcullis_core::{SessionId, UserId};
use rootcause::prelude::Report;

/// Storage for user accounts and their password credentials.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Creates a user together with its password credential.
    ///
    /// Both records are written or neither is.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email address is taken.
    async fn create_account(
        &self,
        user: &User,
        credential: &PasswordCredential,
    ) -> Result<(), Report<StoreError>>;

    /// Finds a user by internal ID.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, Report<StoreError>>;

    /// Finds a user by normalized email address.
    async fn find_user_by_email(&self, email: &Email)
    -> Result<Option<User>, Report<StoreError>>;

    /// Finds the password credential for a user.
    async fn find_credential(
        &self,
        user_id: UserId,
    ) -> Result<Option<PasswordCredential>, Report<StoreError>>;
}

/// Storage for sign-in sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores a new session.
    async fn insert_session(&self, session: &Session) -> Result<(), Report<StoreError>>;

    /// Finds a session by the digest of its current token.
    async fn find_session_by_digest(
        &self,
        token_digest: &str,
    ) -> Result<Option<Session>, Report<StoreError>>;

    /// Overwrites the token digest, expiry, and rotation time of a session.
    async fn update_session(&self, session: &Session) -> Result<(), Report<StoreError>>;

    /// Deletes a session. Deleting an unknown session is not an error.
    async fn delete_session(&self, id: SessionId) -> Result<(), Report<StoreError>>;

    /// Deletes every session that expired before `now`, returning how many
    /// were removed.
    async fn delete_expired_sessions(&self, now: DateTime<Utc>)
    -> Result<u64, Report<StoreError>>;
}
