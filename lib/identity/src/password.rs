//! Password policy and Argon2id hashing.

use crate::error::AuthError;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rootcause::prelude::Report;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum accepted password length, in characters.
pub const MAX_PASSWORD_LEN: usize = 128;

/// Checks a candidate password against the password policy.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` describing the first violated rule.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword {
            reason: format!("must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AuthError::WeakPassword {
            reason: format!("must be at most {MAX_PASSWORD_LEN} characters"),
        });
    }
    if password.trim().is_empty() {
        return Err(AuthError::WeakPassword {
            reason: "must not be only whitespace".to_string(),
        });
    }
    Ok(())
}

/// Argon2id password hasher.
///
/// Hashes are self-describing PHC strings, so hashes produced with different
/// parameters remain verifiable.
#[derive(Clone)]
pub struct Passwords {
    argon2: Argon2<'static>,
}

impl Passwords {
    /// Creates a hasher with the Argon2id defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Creates a hasher with explicit cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the parameters are out of range.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, Report<AuthError>> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::PasswordHash {
                details: e.to_string(),
            }
        })?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, Report<AuthError>> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                details: e.to_string(),
            })?;
        Ok(hash.to_string())
    }

    /// Verifies a password against a stored PHC hash string.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the stored hash cannot be parsed.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, Report<AuthError>> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
            details: e.to_string(),
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash {
                details: e.to_string(),
            }
            .into()),
        }
    }
}

impl Default for Passwords {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Passwords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Passwords").finish_non_exhaustive()
    }
}
