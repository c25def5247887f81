//! In-memory storage backend.

use crate::credential::PasswordCredential;
use crate::error::StoreError;
use crate::session::Session;
use crate::store::{AccountStore, SessionStore};
use crate::user::{Email, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portcullis_core::{SessionId, UserId};
use rootcause::prelude::Report;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Accounts {
    users: HashMap<UserId, User>,
    by_email: HashMap<Email, UserId>,
    credentials: HashMap<UserId, PasswordCredential>,
}

/// Account and session storage held entirely in process memory.
///
/// Implements both [`AccountStore`] and [`SessionStore`]; share one instance
/// behind an `Arc` for both roles.
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<Accounts>,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(
        &self,
        user: &User,
        credential: &PasswordCredential,
    ) -> Result<(), Report<StoreError>> {
        let mut accounts = self.accounts.write().await;

        if accounts.by_email.contains_key(user.email()) {
            return Err(StoreError::Conflict {
                entity: "user",
                key: user.email().to_string(),
            }
            .into());
        }

        accounts.by_email.insert(user.email().clone(), user.id());
        accounts.users.insert(user.id(), user.clone());
        accounts
            .credentials
            .insert(credential.user_id(), credential.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, Report<StoreError>> {
        Ok(self.accounts.read().await.users.get(&id).cloned())
    }

    async fn find_user_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, Report<StoreError>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.users.get(id))
            .cloned())
    }

    async fn find_credential(
        &self,
        user_id: UserId,
    ) -> Result<Option<PasswordCredential>, Report<StoreError>> {
        Ok(self.accounts.read().await.credentials.get(&user_id).cloned())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert_session(&self, session: &Session) -> Result<(), Report<StoreError>> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id()) {
            return Err(StoreError::Conflict {
                entity: "session",
                key: session.id().to_string(),
            }
            .into());
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn find_session_by_digest(
        &self,
        token_digest: &str,
    ) -> Result<Option<Session>, Report<StoreError>> {
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .find(|s| s.token_digest() == token_digest)
            .cloned())
    }

    async fn update_session(&self, session: &Session) -> Result<(), Report<StoreError>> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(stored) => {
                *stored = session.clone();
                Ok(())
            }
            None => Err(StoreError::Backend {
                details: format!("session '{}' does not exist", session.id()),
            }
            .into()),
        }
    }

    async fn delete_session(&self, id: SessionId) -> Result<(), Report<StoreError>> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }

    async fn delete_expired_sessions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<u64, Report<StoreError>> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - sessions.len()) as u64)
    }
}
