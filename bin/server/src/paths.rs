//! Route paths shared by pages, components, and the auth handler.

/// Application route paths.
pub struct Paths;

impl Paths {
    /// Landing page.
    pub const HOME: &'static str = "/";
    /// Sign-in page.
    pub const SIGNIN: &'static str = "/signIn";
    /// Sign-up page.
    pub const SIGNUP: &'static str = "/signUp";
    /// Mount point of the authentication route handler.
    pub const AUTH_API: &'static str = "/api/auth";
}

/// Builds the URL of an auth handler action, e.g. `auth_action("signout")`.
#[must_use]
pub fn auth_action(action: &str) -> String {
    format!("{}/{}", Paths::AUTH_API, action.trim_start_matches('/'))
}
