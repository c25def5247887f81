//! Accounts, password credentials, and sign-in sessions for portcullis.
//!
//! This crate provides:
//! - User accounts keyed by a normalized email address (`User`, `Email`)
//! - Argon2id password credentials (`PasswordCredential`, `Passwords`)
//! - Sessions backed by opaque rotating bearer tokens (`Session`, `SessionToken`)
//! - Storage traits with an in-memory implementation (`AccountStore`, `SessionStore`, `MemoryStore`)
//! - The `AuthService` that ties them together
//!
//! # Token Model
//!
//! A session token is handed to the client exactly once, when the session is
//! created or rotated. Only its SHA-256 digest is persisted, so a leaked
//! database cannot be replayed as live cookies.
//!
//! # Example
//!
//! ```
//! use portcullis_identity::{AuthService, MemoryStore, Passwords};
//! use std::sync::Arc;
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let store = Arc::new(MemoryStore::new());
//! let service = AuthService::new(store.clone(), store, Passwords::new())
//!     .with_session_duration(chrono::Duration::hours(8));
//!
//! let user = service
//!     .register_with_credentials("alice@example.com", "correct horse battery")
//!     .await
//!     .unwrap();
//! let issued = service
//!     .login_with_credentials("Alice@Example.com", "correct horse battery")
//!     .await
//!     .unwrap();
//!
//! let (session, signed_in) = service.authenticate(issued.token.as_str()).await.unwrap();
//! assert_eq!(signed_in.id(), user.id());
//! assert_eq!(session.user_id(), user.id());
//! # });
//! # }
//! ```

pub mod credential;
pub mod error;
pub mod memory;
pub mod password;
pub mod service;
pub mod session;
pub mod store;
pub mod token;
pub mod user;

// Re-export main types at crate root
pub use credential::PasswordCredential;
pub use error::{AuthError, StoreError};
pub use memory::MemoryStore;
pub use password::Passwords;
pub use service::{AuthService, IssuedSession};
pub use session::Session;
pub use store::{AccountStore, SessionStore};
pub use token::SessionToken;
pub use user::{Email, User};
