//! Error types for the authentication route handler.
//!
//! Page-level failures (bad credentials, duplicate email) are not errors here;
//! the handler turns those into redirects. These variants cover requests the
//! handler refuses outright, rendered as JSON bodies.

use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Errors returned by the authentication route handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The path does not name a known action.
    UnknownAction,
    /// The action exists but not for this verb.
    MethodNotAllowed { allowed: Method },
    /// A POST arrived with a foreign `Origin` header.
    CrossOrigin,
    /// The action needs a live session and none was presented.
    SessionRequired,
    /// The request body or query could not be parsed.
    BadRequest(String),
    /// Something failed on our side. The details are logged, not returned.
    Internal(String),
}

impl HandlerError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownAction => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::CrossOrigin => StatusCode::FORBIDDEN,
            Self::SessionRequired => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code placed in the response body.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownAction => "UnknownAction",
            Self::MethodNotAllowed { .. } => "MethodNotAllowed",
            Self::CrossOrigin => "CrossOrigin",
            Self::SessionRequired => "SessionRequired",
            Self::BadRequest(_) => "BadRequest",
            Self::Internal(_) => "InternalError",
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction => write!(f, "unknown auth action"),
            Self::MethodNotAllowed { allowed } => {
                write!(f, "method not allowed, use {allowed}")
            }
            Self::CrossOrigin => write!(f, "cross-origin request rejected"),
            Self::SessionRequired => write!(f, "no active session"),
            Self::BadRequest(details) => write!(f, "bad request: {details}"),
            Self::Internal(details) => write!(f, "internal error: {details}"),
        }
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Internal(details) => {
                tracing::error!(%details, "Auth handler failed");
                json!({ "error": self.code() })
            }
            Self::BadRequest(details) => json!({ "error": self.code(), "message": details }),
            _ => json!({ "error": self.code() }),
        };

        let mut response = (status, Json(body)).into_response();
        if let Self::MethodNotAllowed { allowed } = &self {
            if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_variants() {
        assert_eq!(HandlerError::UnknownAction.status(), StatusCode::NOT_FOUND);
        assert_eq!(HandlerError::CrossOrigin.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            HandlerError::SessionRequired.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            HandlerError::Internal("db down".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = HandlerError::MethodNotAllowed {
            allowed: Method::POST,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).expect("allow"), "POST");
    }

    #[tokio::test]
    async fn internal_details_stay_out_of_body() {
        let response = HandlerError::Internal("password for db is hunter2".to_string())
            .into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = String::from_utf8(body.to_vec()).expect("utf8");

        assert!(!body.contains("hunter2"));
        assert!(body.contains("InternalError"));
    }
}
