//! User account type and email addresses.
//!
//! Accounts are identified externally by their email address and internally
//! by a `UserId`. Emails are normalized on parse so lookups are
//! case-insensitive.

use crate::error::AuthError;
use chrono::{DateTime, Utc};
use portcullis_core::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest email address accepted (RFC 5321 path limit).
const MAX_EMAIL_LEN: usize = 254;

/// A normalized email address.
///
/// Parsing trims surrounding whitespace and lower-cases the address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and normalizes an email address.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` when the address is empty, too long,
    /// or not of the form `local@domain`.
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AuthError::InvalidEmail {
                reason: "address is empty".to_string(),
            });
        }
        if normalized.len() > MAX_EMAIL_LEN {
            return Err(AuthError::InvalidEmail {
                reason: format!("address is longer than {MAX_EMAIL_LEN} characters"),
            });
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(AuthError::InvalidEmail {
                reason: "address contains whitespace".to_string(),
            });
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(AuthError::InvalidEmail {
                reason: "address is missing '@'".to_string(),
            });
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(AuthError::InvalidEmail {
                reason: "address must look like local@domain".to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal platform user ID.
    id: UserId,
    /// Sign-in email address.
    email: Email,
    /// When the account was created.
    created_at: DateTime<Utc>,
    /// When the account was last updated.
    updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account for the given email address.
    #[must_use]
    pub fn new(email: Email) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a user from storage.
    #[must_use]
    pub fn with_all_fields(
        id: UserId,
        email: Email,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            created_at,
            updated_at,
        }
    }

    /// Returns the user's internal platform ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the sign-in email address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns when the user was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the user was last updated.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized() {
        let email = Email::parse("  Alice@Example.COM ").expect("valid");
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn email_rejects_missing_at() {
        let err = Email::parse("alice.example.com").unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail { .. }));
    }

    #[test]
    fn email_rejects_empty_parts() {
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("alice@").is_err());
        assert!(Email::parse("a@b@c").is_err());
    }

    #[test]
    fn email_rejects_inner_whitespace() {
        assert!(Email::parse("al ice@example.com").is_err());
    }

    #[test]
    fn email_rejects_overlong_address() {
        let raw = format!("{}@example.com", "a".repeat(MAX_EMAIL_LEN));
        assert!(Email::parse(&raw).is_err());
    }

    #[test]
    fn email_deserialization_validates() {
        let ok: Email = serde_json::from_str("\"Bob@Example.com\"").expect("deserialize");
        assert_eq!(ok.as_str(), "bob@example.com");

        let bad: Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn new_user_has_generated_id_and_timestamps() {
        let before = Utc::now();
        let user = User::new(Email::parse("carol@example.com").expect("valid"));
        let after = Utc::now();

        assert!(user.id().to_string().starts_with("usr_"));
        assert!(user.created_at() >= before && user.created_at() <= after);
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn with_all_fields_preserves_values() {
        let id = UserId::new();
        let email = Email::parse("dave@example.com").expect("valid");
        let created = Utc::now() - chrono::Duration::days(30);
        let updated = Utc::now() - chrono::Duration::days(1);

        let user = User::with_all_fields(id, email.clone(), created, updated);

        assert_eq!(user.id(), id);
        assert_eq!(user.email(), &email);
        assert_eq!(user.created_at(), created);
        assert_eq!(user.updated_at(), updated);
    }
}
