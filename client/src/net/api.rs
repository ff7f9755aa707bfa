//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and unit
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{UnitData, User};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

pub(crate) const UNITS_ENDPOINT: &str = "/api/units";
pub(crate) const UNITS_EDIT_ENDPOINT: &str = "/api/units/edit";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch every unit from `GET /api/units`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a unit list.
pub async fn fetch_units() -> Result<Vec<UnitData>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(UNITS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("units fetch", resp.status()));
        }
        resp.json::<Vec<UnitData>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Persist one edited unit via `POST /api/units/edit`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the
/// edit (not an admin, validation failure, duplicate identifier).
pub async fn edit_unit(unit: &UnitData) -> Result<UnitData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(UNITS_EDIT_ENDPOINT)
            .json(unit)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("unit edit", resp.status()));
        }
        resp.json::<UnitData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = unit;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct RequestEmailCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("request code", resp.status()));
        }
        let body: RequestEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct VerifyEmailCodeResponse {
    ok: bool,
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds with a non-OK status,
/// or the verification code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("verify code", resp.status()));
        }
        let body: VerifyEmailCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}
