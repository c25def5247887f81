//! Authentication module for the portcullis server.
//!
//! This module provides:
//! - The authentication route handler mounted at `/api/auth/{*action}`
//! - Postgres-backed account and session storage
//! - Session extractors for axum handlers and server functions
//!
//! # Request Model
//!
//! Every auth endpoint is served by one handler function registered for both
//! GET and POST. The trailing path names the action (`session`,
//! `callback/credentials`, `signout`, ...); the handler decides per action
//! which verb is acceptable.

pub mod db;
pub mod handler;
pub mod middleware;

use crate::paths::Paths;
use portcullis_identity::AuthService;

pub use handler::auth_routes;
pub use middleware::{AuthenticatedUser, OptionalAuth, RequireAuth};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Where the handler sends browsers for each auth page.
#[derive(Debug, Clone)]
pub struct AuthPages {
    pub sign_in: String,
    pub sign_up: String,
}

impl Default for AuthPages {
    fn default() -> Self {
        Self {
            sign_in: Paths::SIGNIN.to_string(),
            sign_up: Paths::SIGNUP.to_string(),
        }
    }
}

/// Everything the authentication route handler needs.
#[derive(Clone)]
pub struct AuthOptions {
    /// Identity service performing the actual work.
    pub service: AuthService,
    /// Page locations for redirects.
    pub pages: AuthPages,
    /// Whether to set the Secure flag on cookies.
    pub secure_cookies: bool,
    /// Expected `Origin` of browser POSTs, e.g. `https://app.example.com`.
    /// `None` disables the origin check.
    pub site_origin: Option<String>,
}

impl AuthOptions {
    /// Creates options with default pages, secure cookies, and no origin check.
    #[must_use]
    pub fn new(service: AuthService) -> Self {
        Self {
            service,
            pages: AuthPages::default(),
            secure_cookies: true,
            site_origin: None,
        }
    }

    #[must_use]
    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    #[must_use]
    pub fn with_site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = Some(origin.into().trim_end_matches('/').to_string());
        self
    }
}
