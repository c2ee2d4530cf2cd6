//! Auth routes — password sign-in, session cookie management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated admin extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthAdmin {
    pub identity: session::SessionIdentity,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let identity = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { identity, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

fn auth_error_to_status(err: &auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::InvalidEmail | auth_svc::AuthError::WeakPassword => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::DuplicateEmail => StatusCode::CONFLICT,
        auth_svc::AuthError::BadCredentials => StatusCode::UNAUTHORIZED,
        auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/auth/me` — return the current identity.
pub async fn me(auth: AuthAdmin) -> Json<session::SessionIdentity> {
    Json(auth.identity)
}

/// `POST /api/auth/login` — verify credentials, set session cookie.
pub async fn login(State(state): State<AppState>, Json(body): Json<CredentialsBody>) -> Response {
    let user_id = match auth_svc::authenticate(&state.pool, &body.email, &body.password).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            return (auth_error_to_status(&e), e.to_string()).into_response();
        }
    };

    issue_session(&state, user_id).await
}

/// `POST /api/auth/signup` — create an admin account, set session cookie.
pub async fn signup(State(state): State<AppState>, Json(body): Json<CredentialsBody>) -> Response {
    let user_id = match auth_svc::create_user(&state.pool, &body.email, &body.password).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "signup rejected");
            return (auth_error_to_status(&e), e.to_string()).into_response();
        }
    };

    issue_session(&state, user_id).await
}

async fn issue_session(state: &AppState, user_id: uuid::Uuid) -> Response {
    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to create session").into_response();
        }
    };

    let identity = match session::validate_session(&state.pool, &token).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            tracing::error!("freshly created session did not validate");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "session validation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let jar = CookieJar::new().add(session_cookie(token));
    (jar, Json(identity)).into_response()
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthAdmin) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed; clearing cookie anyway");
    }

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
