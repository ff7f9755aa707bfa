//! Auth routes: session cookie, email access codes, admin gate.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::config::cookie_secure;
use crate::services::email_auth::{self, EmailAuthError, EmailDelivery};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn email_auth_error_to_status(err: &EmailAuthError) -> StatusCode {
    match err {
        EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode => StatusCode::BAD_REQUEST,
        EmailAuthError::VerificationFailed => StatusCode::UNAUTHORIZED,
        EmailAuthError::DeliveryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        EmailAuthError::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
        EmailAuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated user holding the `admin` role.
/// Rejects with 401 when logged out and 403 for any other role.
pub struct AdminUser(pub session::SessionUser);

pub(crate) fn require_admin(user: session::SessionUser) -> Result<AdminUser, StatusCode> {
    if user.is_admin() { Ok(AdminUser(user)) } else { Err(StatusCode::FORBIDDEN) }
}

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_admin(auth.user)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }
    let jar = CookieJar::new().add(cleared_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
}

/// `POST /api/auth/email/request-code`: issue a code and deliver it.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let delivery = EmailDelivery::from_env();
    if !delivery.is_available() {
        tracing::warn!("email code requested but no delivery method is configured");
        return email_auth_error_to_status(&EmailAuthError::DeliveryUnavailable).into_response();
    }

    let (email, code) = match email_auth::request_access_code(&state.pool, &body.email).await {
        Ok(issued) => issued,
        Err(e) => {
            tracing::warn!(error = %e, "email code request failed");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    match email_auth::deliver_access_code(&delivery, &email, code).await {
        Ok(echoed) => {
            tracing::info!(%email, echoed = echoed.is_some(), "email login code issued");
            Json(serde_json::json!({ "ok": true, "code": echoed })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %email, "email code delivery failed");
            email_auth_error_to_status(&e).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

/// `POST /api/auth/email/verify-code`: consume a code and start a session.
pub async fn verify_email_code(State(state): State<AppState>, Json(body): Json<VerifyCodeBody>) -> Response {
    let user_id = match email_auth::verify_access_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(e) => {
            tracing::info!(error = %e, "email code verification rejected");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    let jar = CookieJar::new().add(session_cookie(token));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
