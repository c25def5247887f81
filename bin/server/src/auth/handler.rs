//! The authentication route handler.
//!
//! [`auth_routes`] binds one [`AuthOptions`] to one handler function and
//! registers that same function for GET and POST on `/api/auth/{*action}`.

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Path, Query, Request, State},
    http::{HeaderMap, Method, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use portcullis_identity::{AuthError, IssuedSession};
use rootcause::prelude::Report;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::{AuthOptions, SESSION_COOKIE};
use crate::error::HandlerError;
use crate::paths::{Paths, auth_action};

/// Route pattern the handler is mounted on.
pub const AUTH_ROUTE: &str = "/api/auth/{*action}";

/// Provider id of the email/password provider.
const CREDENTIALS_PROVIDER: &str = "credentials";

/// Builds the auth router: one handler, mounted for both GET and POST.
pub fn auth_routes<S>(options: AuthOptions) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(AUTH_ROUTE, get(handle).post(handle))
        .with_state(Arc::new(options))
}

/// Actions understood by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Providers,
    Session,
    SignInPage,
    ErrorPage,
    Callback { provider: String },
    Register,
    SignOut,
    Refresh,
}

impl AuthAction {
    /// Parses the path captured after `/api/auth/`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["providers"] => Some(Self::Providers),
            ["session"] => Some(Self::Session),
            ["signin"] => Some(Self::SignInPage),
            ["error"] => Some(Self::ErrorPage),
            ["signin", provider] | ["callback", provider] => Some(Self::Callback {
                provider: (*provider).to_string(),
            }),
            ["register"] => Some(Self::Register),
            ["signout"] => Some(Self::SignOut),
            ["refresh"] => Some(Self::Refresh),
            _ => None,
        }
    }

    /// Returns the single verb this action accepts.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Providers | Self::Session | Self::SignInPage | Self::ErrorPage => Method::GET,
            Self::Callback { .. } | Self::Register | Self::SignOut | Self::Refresh => Method::POST,
        }
    }
}

/// Body of the sign-in and register forms.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    email: String,
    password: String,
    #[serde(rename = "callbackUrl")]
    callback_url: Option<String>,
}

/// Query of the error page action.
#[derive(Debug, Deserialize)]
struct ErrorQuery {
    error: Option<String>,
}

/// Error codes appended to page redirects as `?error=`.
mod error_code {
    pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";
    pub const EMAIL_IN_USE: &str = "EmailInUse";
    pub const INVALID_INPUT: &str = "InvalidInput";
    pub const CONFIGURATION: &str = "Configuration";
    pub const DEFAULT: &str = "Default";
}

/// The handler behind every auth endpoint, whatever the verb.
async fn handle(
    State(options): State<Arc<AuthOptions>>,
    Path(action): Path<String>,
    jar: CookieJar,
    request: Request,
) -> Result<Response, HandlerError> {
    let method = request.method().clone();
    let parsed = AuthAction::parse(&action).ok_or_else(|| {
        tracing::debug!(%action, "Unknown auth action");
        HandlerError::UnknownAction
    })?;

    if parsed.method() != method {
        return Err(HandlerError::MethodNotAllowed {
            allowed: parsed.method(),
        });
    }

    if method == Method::POST {
        check_origin(&options, request.headers())?;
    }

    tracing::debug!(?parsed, "Dispatching auth action");

    match parsed {
        AuthAction::Providers => Ok(providers().into_response()),
        AuthAction::Session => session(&options, jar).await,
        AuthAction::SignInPage => Ok(Redirect::to(&options.pages.sign_in).into_response()),
        AuthAction::ErrorPage => {
            let Query(query) = Query::<ErrorQuery>::try_from_uri(request.uri())
                .map_err(|e| HandlerError::BadRequest(e.body_text()))?;
            let code = query
                .error
                .as_deref()
                .filter(|c| !c.is_empty() && c.chars().all(|ch| ch.is_ascii_alphanumeric()))
                .unwrap_or(error_code::DEFAULT);
            Ok(page_error(&options.pages.sign_in, code))
        }
        AuthAction::Callback { provider } => {
            if provider != CREDENTIALS_PROVIDER {
                return Err(HandlerError::UnknownAction);
            }
            let form = read_form(request).await?;
            sign_in(&options, jar, form).await
        }
        AuthAction::Register => {
            let form = read_form(request).await?;
            register(&options, jar, form).await
        }
        AuthAction::SignOut => Ok(sign_out(&options, jar).await),
        AuthAction::Refresh => refresh(&options, jar).await,
    }
}

async fn read_form(request: Request) -> Result<CredentialsForm, HandlerError> {
    let Form(form) = Form::<CredentialsForm>::from_request(request, &())
        .await
        .map_err(|e| HandlerError::BadRequest(e.body_text()))?;
    Ok(form)
}

/// Rejects browser POSTs whose `Origin` is not the configured site origin.
fn check_origin(options: &AuthOptions, headers: &HeaderMap) -> Result<(), HandlerError> {
    let (Some(expected), Some(origin)) = (options.site_origin.as_deref(), headers.get(header::ORIGIN))
    else {
        return Ok(());
    };

    if origin.to_str().ok() == Some(expected) {
        Ok(())
    } else {
        tracing::warn!(?origin, expected, "Rejected cross-origin auth POST");
        Err(HandlerError::CrossOrigin)
    }
}

fn providers() -> Json<serde_json::Value> {
    Json(json!({
        CREDENTIALS_PROVIDER: {
            "id": CREDENTIALS_PROVIDER,
            "name": "Credentials",
            "type": "credentials",
            "signinUrl": auth_action("signin/credentials"),
            "callbackUrl": auth_action("callback/credentials"),
        }
    }))
}

async fn session(options: &AuthOptions, jar: CookieJar) -> Result<Response, HandlerError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(Json(json!({})).into_response());
    };

    match options.service.authenticate(cookie.value()).await {
        Ok((session, user)) => Ok(Json(json!({
            "user": {
                "id": user.id().to_string(),
                "email": user.email().as_str(),
            },
            "expires": session.expires_at().to_rfc3339(),
        }))
        .into_response()),
        Err(e) if e.current_context().is_client_error() => {
            let jar = jar.add(removal_cookie());
            Ok((jar, Json(json!({}))).into_response())
        }
        Err(e) => Err(internal(e)),
    }
}

async fn sign_in(
    options: &AuthOptions,
    jar: CookieJar,
    form: CredentialsForm,
) -> Result<Response, HandlerError> {
    let target = safe_callback(form.callback_url.as_deref());

    match options
        .service
        .login_with_credentials(&form.email, &form.password)
        .await
    {
        Ok(issued) => {
            let jar = jar.add(session_cookie(options, &issued));
            Ok((jar, Redirect::to(target)).into_response())
        }
        Err(e) if e.current_context().is_client_error() => Ok(page_error(
            &options.pages.sign_in,
            error_code::CREDENTIALS_SIGNIN,
        )),
        Err(e) => {
            tracing::error!(error = %e, "Sign-in failed");
            Ok(page_error(&options.pages.sign_in, error_code::CONFIGURATION))
        }
    }
}

async fn register(
    options: &AuthOptions,
    jar: CookieJar,
    form: CredentialsForm,
) -> Result<Response, HandlerError> {
    if let Err(e) = options
        .service
        .register_with_credentials(&form.email, &form.password)
        .await
    {
        let code = match e.current_context() {
            AuthError::EmailInUse => error_code::EMAIL_IN_USE,
            AuthError::InvalidEmail { .. } | AuthError::WeakPassword { .. } => {
                error_code::INVALID_INPUT
            }
            _ => {
                tracing::error!(error = %e, "Registration failed");
                error_code::CONFIGURATION
            }
        };
        return Ok(page_error(&options.pages.sign_up, code));
    }

    sign_in(options, jar, form).await
}

async fn sign_out(options: &AuthOptions, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Err(e) = options.service.revoke_session(cookie.value()).await {
            if !e.current_context().is_client_error() {
                tracing::error!(error = %e, "Failed to revoke session on sign-out");
            }
        }
    }

    let jar = jar.add(removal_cookie());
    (jar, Redirect::to(&options.pages.sign_in)).into_response()
}

async fn refresh(options: &AuthOptions, jar: CookieJar) -> Result<Response, HandlerError> {
    let cookie = jar
        .get(SESSION_COOKIE)
        .ok_or(HandlerError::SessionRequired)?;

    match options.service.rotate_session(cookie.value()).await {
        Ok(issued) => {
            let expires = issued.session.expires_at().to_rfc3339();
            let jar = jar.add(session_cookie(options, &issued));
            Ok((jar, Json(json!({ "expires": expires }))).into_response())
        }
        Err(e) if e.current_context().is_client_error() => Err(HandlerError::SessionRequired),
        Err(e) => Err(internal(e)),
    }
}

fn internal(report: Report<AuthError>) -> HandlerError {
    HandlerError::Internal(report.to_string())
}

fn session_cookie(options: &AuthOptions, issued: &IssuedSession) -> Cookie<'static> {
    let max_age = options.service.session_duration().num_seconds();
    Cookie::build((SESSION_COOKIE, issued.token.as_str().to_string()))
        .path("/")
        .http_only(true)
        .secure(options.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::seconds(max_age))
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(TimeDuration::ZERO)
        .build()
}

/// Redirects to `page` with `?error=<code>`.
fn page_error(page: &str, code: &str) -> Response {
    Redirect::to(&format!("{page}?error={code}")).into_response()
}

/// Returns `candidate` if it is a same-origin absolute path, else the home page.
///
/// Only plain URL path characters are accepted. Browsers drop tab and newline
/// while parsing, so `/\t/host` would otherwise become `//host`.
fn safe_callback(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path.chars().all(is_callback_char) =>
        {
            path
        }
        _ => Paths::HOME,
    }
}

fn is_callback_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '/' | '.' | '_' | '~' | '%' | '?' | '=' | '&' | '#' | '-'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use portcullis_identity::{AuthService, MemoryStore, Passwords};
    use tower::ServiceExt;

    const EMAIL: &str = "victor@example.com";
    const PASSWORD: &str = "hunter2hunter2";

    fn options_with_store() -> (AuthOptions, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let passwords = Passwords::with_params(8, 1, 1).expect("valid params");
        let options = AuthOptions::new(AuthService::new(store.clone(), store.clone(), passwords))
            .with_secure_cookies(false)
            .with_site_origin("https://app.example.com");
        (options, store)
    }

    fn options() -> AuthOptions {
        options_with_store().0
    }

    fn app(options: AuthOptions) -> Router {
        auth_routes(options)
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .expect("location")
            .to_str()
            .expect("ascii")
    }

    /// Returns the `session=<token>` pair from a Set-Cookie header.
    fn session_cookie_pair(response: &Response) -> String {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("session="))
            .and_then(|v| v.split(';').next())
            .expect("session cookie")
            .to_string()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    async fn signed_in(options: &AuthOptions) -> String {
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");
        let response = app(options.clone())
            .oneshot(form_post(
                "/api/auth/callback/credentials",
                &format!("email={EMAIL}&password={PASSWORD}&callbackUrl=%2Fdashboard"),
            ))
            .await
            .expect("response");
        session_cookie_pair(&response)
    }

    #[test]
    fn parses_actions() {
        assert_eq!(AuthAction::parse("session"), Some(AuthAction::Session));
        assert_eq!(
            AuthAction::parse("callback/credentials"),
            Some(AuthAction::Callback {
                provider: "credentials".to_string()
            })
        );
        assert_eq!(
            AuthAction::parse("signin/credentials"),
            AuthAction::parse("callback/credentials")
        );
        assert_eq!(AuthAction::parse("signin"), Some(AuthAction::SignInPage));
        assert_eq!(AuthAction::parse("callback/a/b"), None);
        assert_eq!(AuthAction::parse("nope"), None);
    }

    #[test]
    fn callback_url_must_stay_on_site() {
        assert_eq!(safe_callback(Some("/dashboard")), "/dashboard");
        assert_eq!(safe_callback(Some("//evil.example")), "/");
        assert_eq!(safe_callback(Some("https://evil.example")), "/");
        assert_eq!(safe_callback(Some("/\\evil.example")), "/");
        assert_eq!(safe_callback(Some("/\t/evil.example")), "/");
        assert_eq!(safe_callback(Some("/\r\n/evil.example")), "/");
        assert_eq!(safe_callback(Some("/a\nb")), "/");
        assert_eq!(safe_callback(Some("/a b")), "/");
        assert_eq!(
            safe_callback(Some("/search?q=rust&page=2#top")),
            "/search?q=rust&page=2#top"
        );
        assert_eq!(safe_callback(None), "/");
    }

    #[tokio::test]
    async fn get_and_post_reach_the_same_handler() {
        let get = app(options())
            .oneshot(
                Request::get("/api/auth/bogus")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let post = app(options())
            .oneshot(
                Request::post("/api/auth/bogus")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(get.status(), StatusCode::NOT_FOUND);
        assert_eq!(post.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(get).await, body_json(post).await);
    }

    #[tokio::test]
    async fn other_verbs_are_not_routed() {
        let response = app(options())
            .oneshot(
                Request::delete("/api/auth/session")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn wrong_verb_for_action_is_rejected() {
        let response = app(options())
            .oneshot(
                Request::get("/api/auth/signout")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).expect("allow"), "POST");
    }

    #[tokio::test]
    async fn providers_lists_credentials() {
        let response = app(options())
            .oneshot(
                Request::get("/api/auth/providers")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let body = body_json(response).await;
        assert_eq!(body["credentials"]["type"], "credentials");
        assert_eq!(
            body["credentials"]["callbackUrl"],
            "/api/auth/callback/credentials"
        );
    }

    #[tokio::test]
    async fn sign_in_sets_cookie_and_redirects_to_callback() {
        let options = options();
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");

        let response = app(options)
            .oneshot(form_post(
                "/api/auth/callback/credentials",
                &format!("email={EMAIL}&password={PASSWORD}&callbackUrl=%2Fdashboard"),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");

        let set_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("session="))
            .expect("session cookie")
            .to_string();
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn bad_credentials_redirect_with_error() {
        let response = app(options())
            .oneshot(form_post(
                "/api/auth/callback/credentials",
                "email=nobody%40example.com&password=whatever123",
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/signIn?error=CredentialsSignin");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn off_site_callback_is_ignored() {
        let options = options();
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");

        let response = app(options)
            .oneshot(form_post(
                "/api/auth/signin/credentials",
                &format!(
                    "email={EMAIL}&password={PASSWORD}&callbackUrl=https%3A%2F%2Fevil.example"
                ),
            ))
            .await
            .expect("response");

        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn callback_with_whitespace_redirects_home() {
        let (options, _) = options_with_store();
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");

        let response = app(options)
            .oneshot(form_post(
                "/api/auth/callback/credentials",
                &format!("email={EMAIL}&password={PASSWORD}&callbackUrl=%2F%09%2Fevil.example"),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn callback_with_newline_still_completes_sign_in() {
        let (options, store) = options_with_store();
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");

        let response = app(options)
            .oneshot(form_post(
                "/api/auth/callback/credentials",
                &format!("email={EMAIL}&password={PASSWORD}&callbackUrl=%2Fa%0Ab"),
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(session_cookie_pair(&response).len() > "session=".len());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn cross_origin_post_is_forbidden() {
        let mut request = form_post(
            "/api/auth/callback/credentials",
            "email=a%40b.c&password=whatever123",
        );
        request.headers_mut().insert(
            header::ORIGIN,
            "https://evil.example".parse().expect("header"),
        );

        let response = app(options()).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn same_origin_post_is_allowed() {
        let mut request = form_post(
            "/api/auth/callback/credentials",
            "email=a%40b.c&password=whatever123",
        );
        request.headers_mut().insert(
            header::ORIGIN,
            "https://app.example.com".parse().expect("header"),
        );

        let response = app(options()).oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn session_reports_signed_in_user() {
        let options = options();
        let cookie = signed_in(&options).await;

        let response = app(options)
            .oneshot(
                Request::get("/api/auth/session")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let body = body_json(response).await;
        assert_eq!(body["user"]["email"], EMAIL);
        assert!(body["expires"].is_string());
    }

    #[tokio::test]
    async fn session_without_cookie_is_empty() {
        let response = app(options())
            .oneshot(
                Request::get("/api/auth/session")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn register_signs_the_new_user_in() {
        let response = app(options())
            .oneshot(form_post(
                "/api/auth/register",
                "email=wendy%40example.com&password=longenough1",
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(session_cookie_pair(&response).len() > "session=".len());
    }

    #[tokio::test]
    async fn register_reports_duplicate_and_invalid_input() {
        let options = options();
        options
            .service
            .register_with_credentials(EMAIL, PASSWORD)
            .await
            .expect("register");

        let duplicate = app(options.clone())
            .oneshot(form_post(
                "/api/auth/register",
                &format!("email={EMAIL}&password={PASSWORD}"),
            ))
            .await
            .expect("response");
        assert_eq!(location(&duplicate), "/signUp?error=EmailInUse");

        let weak = app(options)
            .oneshot(form_post(
                "/api/auth/register",
                "email=new%40example.com&password=short",
            ))
            .await
            .expect("response");
        assert_eq!(location(&weak), "/signUp?error=InvalidInput");
    }

    #[tokio::test]
    async fn refresh_rotates_the_cookie() {
        let options = options();
        let cookie = signed_in(&options).await;

        let response = app(options.clone())
            .oneshot(
                Request::post("/api/auth/refresh")
                    .header(header::COOKIE, cookie.clone())
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let rotated = session_cookie_pair(&response);
        assert_ne!(rotated, cookie);

        let stale = app(options)
            .oneshot(
                Request::post("/api/auth/refresh")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(stale.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sign_out_revokes_and_clears_cookie() {
        let options = options();
        let cookie = signed_in(&options).await;

        let response = app(options.clone())
            .oneshot(
                Request::post("/api/auth/signout")
                    .header(header::COOKIE, cookie.clone())
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(location(&response), "/signIn");
        let cleared = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("set-cookie")
            .to_str()
            .expect("ascii");
        assert!(cleared.contains("Max-Age=0"));

        let token = cookie.trim_start_matches("session=");
        assert!(options.service.authenticate(token).await.is_err());
    }

    #[tokio::test]
    async fn error_page_redirects_with_code() {
        let response = app(options())
            .oneshot(
                Request::get("/api/auth/error?error=AccessDenied")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(location(&response), "/signIn?error=AccessDenied");
    }

    #[tokio::test]
    async fn error_page_drops_unsafe_codes() {
        let response = app(options())
            .oneshot(
                Request::get("/api/auth/error?error=%3Cscript%3E")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(location(&response), "/signIn?error=Default");
    }
}
