//! Sign-in sessions.
//!
//! A session is created after a successful password check and is looked up
//! on every request by the digest of the bearer token the client presents.
//! Rotating a session swaps the digest and pushes out the expiry; the
//! session keeps its id.

use chrono::{DateTime, Duration, Utc};
use portcullis_core::{SessionId, UserId};
use serde::{Deserialize, Serialize};

/// Represents an active sign-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,
    /// The signed-in user's ID.
    user_id: UserId,
    /// SHA-256 digest of the current bearer token.
    token_digest: String,
    /// When the session was created.
    created_at: DateTime<Utc>,
    /// When the session expires.
    expires_at: DateTime<Utc>,
    /// When the token was last rotated.
    rotated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a new session valid for `duration`.
    #[must_use]
    pub fn new(user_id: UserId, token_digest: String, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            user_id,
            token_digest,
            created_at: now,
            expires_at: now + duration,
            rotated_at: None,
        }
    }

    /// Reconstitutes a session from storage.
    #[must_use]
    pub fn with_all_fields(
        id: SessionId,
        user_id: UserId,
        token_digest: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        rotated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id,
            token_digest,
            created_at,
            expires_at,
            rotated_at,
        }
    }

    /// Returns the session ID.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the signed-in user's ID.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the digest of the current bearer token.
    #[must_use]
    pub fn token_digest(&self) -> &str {
        &self.token_digest
    }

    /// Returns when the session was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the session expires.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns when the token was last rotated, if ever.
    #[must_use]
    pub fn rotated_at(&self) -> Option<DateTime<Utc>> {
        self.rotated_at
    }

    /// Returns true if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true if the session is expired at the given instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Replaces the token digest and extends the expiry from now.
    pub fn rotate(&mut self, token_digest: String, duration: Duration) {
        let now = Utc::now();
        self.token_digest = token_digest;
        self.expires_at = now + duration;
        self.rotated_at = Some(now);
    }
}
