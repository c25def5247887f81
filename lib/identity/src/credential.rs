//! Stored password credentials.

use chrono::{DateTime, Utc};
use portcullis_core::{CredentialId, UserId};

/// A password credential attached to a user account.
///
/// Holds the Argon2id PHC hash only. One credential exists per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    id: CredentialId,
    user_id: UserId,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PasswordCredential {
    /// Creates a credential for the given user from an already computed hash.
    #[must_use]
    pub fn new(user_id: UserId, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: CredentialId::new(),
            user_id,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a credential from storage.
    #[must_use]
    pub fn with_all_fields(
        id: CredentialId,
        user_id: UserId,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            password_hash,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> CredentialId {
        self.id
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the stored PHC hash string.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
