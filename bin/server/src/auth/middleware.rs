//! Session extractors for axum handlers and server functions.
//!
//! The extractors read `Arc<AuthOptions>` from a request extension rather
//! than from router state, so they also work inside Leptos server functions
//! via `leptos_axum::extract()`.

use axum::{
    Extension,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use portcullis_identity::{AuthError, Session, User};
use std::sync::Arc;

use super::{AuthOptions, SESSION_COOKIE};
use crate::paths::Paths;

/// A signed-in user and the session that proves it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session: Session,
    pub user: User,
}

/// Extractor for requiring a signed-in user.
///
/// If the user is not signed in, they are redirected to the sign-in page.
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(options) = Extension::<Arc<AuthOptions>>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                tracing::error!("AuthOptions extension is not installed");
                AuthRejection::InternalError
            })?;
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthRejection::InternalError)?;

        let token = jar
            .get(SESSION_COOKIE)
            .ok_or(AuthRejection::NotAuthenticated)?;

        match options.service.authenticate(token.value()).await {
            Ok((session, user)) => Ok(RequireAuth(AuthenticatedUser { session, user })),
            Err(e) => match e.current_context() {
                AuthError::SessionNotFound => Err(AuthRejection::NotAuthenticated),
                AuthError::SessionExpired { .. } => Err(AuthRejection::SessionExpired),
                _ => {
                    tracing::error!(error = %e, "Session lookup failed");
                    Err(AuthRejection::InternalError)
                }
            },
        }
    }
}

/// Extractor for optionally getting the signed-in user.
///
/// Yields `None` if the user is not signed in. Storage failures are still
/// rejected so callers do not mistake an outage for a signed-out user.
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RequireAuth::from_request_parts(parts, state).await {
            Ok(RequireAuth(user)) => Ok(OptionalAuth(Some(user))),
            Err(AuthRejection::InternalError) => Err(AuthRejection::InternalError),
            Err(_) => Ok(OptionalAuth(None)),
        }
    }
}

/// Rejection type for the session extractors.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthRejection {
    NotAuthenticated,
    SessionExpired,
    InternalError,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::SessionExpired => {
                Redirect::to(Paths::SIGNIN).into_response()
            }
            Self::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
