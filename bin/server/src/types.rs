//! Shared types used across server functions and UI components.

use serde::{Deserialize, Serialize};

/// Navigation link rendered in page headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Destination path.
    pub href: String,
    /// Label text.
    pub text: String,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// Signed-in user info for display in the UI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    /// Session expiry as an RFC 3339 timestamp.
    pub expires: String,
}
