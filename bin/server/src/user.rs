//! User-related server functions.

use crate::types::UserInfo;
use leptos::prelude::*;

/// Server function to get the signed-in user, if any.
#[server]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::auth::OptionalAuth;

    let OptionalAuth(auth) = leptos_axum::extract().await?;

    Ok(auth.map(|auth| UserInfo {
        id: auth.user.id().to_string(),
        email: auth.user.email().to_string(),
        expires: auth.session.expires_at().to_rfc3339(),
    }))
}
