//! Error types for the identity crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `StoreError`: Failures inside a storage backend
//! - `AuthError`: Failures of account and session operations, as seen by callers

use portcullis_core::SessionId;
use std::fmt;

/// Errors from storage backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    Conflict {
        /// The kind of record being written.
        entity: &'static str,
        /// The conflicting key.
        key: String,
    },
    /// The backend failed to execute the operation.
    Backend { details: String },
    /// A stored record could not be decoded.
    Corrupt { details: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { entity, key } => {
                write!(f, "{entity} '{key}' already exists")
            }
            Self::Backend { details } => {
                write!(f, "storage backend error: {details}")
            }
            Self::Corrupt { details } => {
                write!(f, "corrupt stored record: {details}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors from account and session operations.
///
/// `InvalidCredentials` is deliberately shared by "no such account" and
/// "wrong password".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The email address failed validation.
    InvalidEmail { reason: String },
    /// The password does not satisfy the password policy.
    WeakPassword { reason: String },
    /// An account with this email address already exists.
    EmailInUse,
    /// Email/password combination was not accepted.
    InvalidCredentials,
    /// No session matches the presented token.
    SessionNotFound,
    /// The session matching the token has expired.
    SessionExpired { session_id: SessionId },
    /// Hashing or parsing a password hash failed.
    PasswordHash { details: String },
    /// The storage backend failed.
    Storage,
}

impl AuthError {
    /// Returns true if the error was caused by the caller's input rather than
    /// by the system.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::PasswordHash { .. } | Self::Storage)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail { reason } => write!(f, "invalid email address: {reason}"),
            Self::WeakPassword { reason } => write!(f, "password rejected: {reason}"),
            Self::EmailInUse => write!(f, "email address is already registered"),
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::SessionNotFound => write!(f, "session not found"),
            Self::SessionExpired { session_id } => {
                write!(f, "session has expired: {session_id}")
            }
            Self::PasswordHash { details } => write!(f, "password hashing failed: {details}"),
            Self::Storage => write!(f, "storage operation failed"),
        }
    }
}

impl std::error::Error for AuthError {}
