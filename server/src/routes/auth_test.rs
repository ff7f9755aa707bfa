use super::*;
use uuid::Uuid;

fn user(role: &str) -> session::SessionUser {
    session::SessionUser { id: Uuid::nil(), name: "alice".into(), email: None, role: role.into() }
}

// =============================================================================
// require_admin
// =============================================================================

#[test]
fn require_admin_accepts_admin() {
    let admin = require_admin(user("admin")).ok().unwrap();
    assert_eq!(admin.0.name, "alice");
}

#[test]
fn require_admin_forbids_other_roles() {
    for role in ["csv", "export", "obvius", "observer"] {
        assert_eq!(require_admin(user(role)).err(), Some(StatusCode::FORBIDDEN), "{role}");
    }
}

// =============================================================================
// email_auth_error_to_status
// =============================================================================

#[test]
fn bad_input_is_bad_request() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidCode), StatusCode::BAD_REQUEST);
}

#[test]
fn failed_verification_is_unauthorized() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::VerificationFailed), StatusCode::UNAUTHORIZED);
}

#[test]
fn delivery_failures_map_to_upstream_statuses() {
    assert_eq!(
        email_auth_error_to_status(&EmailAuthError::DeliveryUnavailable),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        email_auth_error_to_status(&EmailAuthError::EmailDelivery("rejected".into())),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn database_error_is_internal() {
    let err = EmailAuthError::Db(sqlx::Error::RowNotFound);
    assert_eq!(email_auth_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_root_scoped() {
    let cookie = session_cookie("tok".into());
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_session_cookie();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
