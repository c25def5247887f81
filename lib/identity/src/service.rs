//! Account registration, password sign-in, and session management.

use crate::credential::PasswordCredential;
use crate::error::{AuthError, StoreError};
use crate::password::{Passwords, validate_password};
use crate::session::Session;
use crate::store::{AccountStore, SessionStore};
use crate::token::{self, SessionToken};
use crate::user::{Email, User};
use chrono::{Duration, Utc};
use rootcause::prelude::{Report, ResultExt};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Default session lifetime.
pub const DEFAULT_SESSION_DURATION_DAYS: i64 = 7;

/// A session together with the raw bearer token that unlocks it.
///
/// The token is not recoverable from storage; hand it to the client now.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub session: Session,
    pub token: SessionToken,
}

/// Credential-based authentication over pluggable storage.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    sessions: Arc<dyn SessionStore>,
    passwords: Passwords,
    session_duration: Duration,
}

impl AuthService {
    /// Creates a service with the default session lifetime.
    #[must_use]
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        sessions: Arc<dyn SessionStore>,
        passwords: Passwords,
    ) -> Self {
        Self {
            accounts,
            sessions,
            passwords,
            session_duration: Duration::days(DEFAULT_SESSION_DURATION_DAYS),
        }
    }

    /// Overrides how long issued and rotated sessions stay valid.
    #[must_use]
    pub fn with_session_duration(mut self, duration: Duration) -> Self {
        self.session_duration = duration;
        self
    }

    /// Returns the configured session lifetime.
    #[must_use]
    pub fn session_duration(&self) -> Duration {
        self.session_duration
    }

    /// Creates an account with a password credential.
    ///
    /// # Errors
    ///
    /// - `InvalidEmail` / `WeakPassword` when the input fails validation
    /// - `EmailInUse` when the address is already registered
    #[instrument(skip(self, password))]
    pub async fn register_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, Report<AuthError>> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        if self
            .accounts
            .find_user_by_email(&email)
            .await
            .context(AuthError::Storage)?
            .is_some()
        {
            return Err(AuthError::EmailInUse.into());
        }

        let user = User::new(email);
        let credential = PasswordCredential::new(user.id(), self.passwords.hash(password)?);

        if let Err(e) = self.accounts.create_account(&user, &credential).await {
            // Lost a race with a concurrent registration for the same address.
            if matches!(e.current_context(), StoreError::Conflict { .. }) {
                return Err(AuthError::EmailInUse.into());
            }
            return Err(e.context(AuthError::Storage));
        }

        info!(user_id = %user.id(), "Registered new account");
        Ok(user)
    }

    /// Verifies an email/password pair and opens a new session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an unknown address, a malformed
    /// address, an account without a password, or a wrong password alike.
    #[instrument(skip(self, password))]
    pub async fn login_with_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<IssuedSession, Report<AuthError>> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = self
            .accounts
            .find_user_by_email(&email)
            .await
            .context(AuthError::Storage)?
        else {
            debug!("Sign-in attempt for unknown account");
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(credential) = self
            .accounts
            .find_credential(user.id())
            .await
            .context(AuthError::Storage)?
        else {
            warn!(user_id = %user.id(), "Account has no password credential");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self
            .passwords
            .verify(password, credential.password_hash())?
        {
            debug!(user_id = %user.id(), "Sign-in attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = SessionToken::generate();
        let session = Session::new(user.id(), token.digest(), self.session_duration);
        self.sessions
            .insert_session(&session)
            .await
            .context(AuthError::Storage)?;

        info!(user_id = %user.id(), session_id = %session.id(), "Opened session");
        Ok(IssuedSession { session, token })
    }

    /// Resolves a bearer token to its live session and user.
    ///
    /// Expired sessions are deleted when encountered.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` or `SessionExpired`.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, raw_token: &str) -> Result<(Session, User), Report<AuthError>> {
        let session = self.live_session(raw_token).await?;

        let Some(user) = self
            .accounts
            .find_user_by_id(session.user_id())
            .await
            .context(AuthError::Storage)?
        else {
            warn!(session_id = %session.id(), "Session refers to a missing user");
            return Err(AuthError::SessionNotFound.into());
        };

        Ok((session, user))
    }

    /// Replaces a session's token and extends its expiry.
    ///
    /// The presented token stops working immediately.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` or `SessionExpired`.
    #[instrument(skip_all)]
    pub async fn rotate_session(&self, raw_token: &str) -> Result<IssuedSession, Report<AuthError>> {
        let mut session = self.live_session(raw_token).await?;

        let token = SessionToken::generate();
        session.rotate(token.digest(), self.session_duration);
        self.sessions
            .update_session(&session)
            .await
            .context(AuthError::Storage)?;

        debug!(session_id = %session.id(), "Rotated session token");
        Ok(IssuedSession { session, token })
    }

    /// Ends the session identified by a bearer token.
    ///
    /// Expired sessions can still be revoked.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if no session matches the token.
    #[instrument(skip_all)]
    pub async fn revoke_session(&self, raw_token: &str) -> Result<(), Report<AuthError>> {
        let Some(session) = self
            .sessions
            .find_session_by_digest(&token::digest(raw_token))
            .await
            .context(AuthError::Storage)?
        else {
            return Err(AuthError::SessionNotFound.into());
        };

        self.sessions
            .delete_session(session.id())
            .await
            .context(AuthError::Storage)?;

        info!(session_id = %session.id(), user_id = %session.user_id(), "Revoked session");
        Ok(())
    }

    /// Deletes all expired sessions, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backend fails.
    pub async fn purge_expired_sessions(&self) -> Result<u64, Report<AuthError>> {
        self.sessions
            .delete_expired_sessions(Utc::now())
            .await
            .context(AuthError::Storage)
    }

    async fn live_session(&self, raw_token: &str) -> Result<Session, Report<AuthError>> {
        let Some(session) = self
            .sessions
            .find_session_by_digest(&token::digest(raw_token))
            .await
            .context(AuthError::Storage)?
        else {
            return Err(AuthError::SessionNotFound.into());
        };

        if session.is_expired() {
            if let Err(e) = self.sessions.delete_session(session.id()).await {
                warn!(error = %e, session_id = %session.id(), "Failed to delete expired session");
            }
            return Err(AuthError::SessionExpired {
                session_id: session.id(),
            }
            .into());
        }

        Ok(session)
    }
}
