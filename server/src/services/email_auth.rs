//! Email access-code auth service.
//!
//! Creates and verifies short-lived six-character codes linked to an email.
//! Codes are stored as SHA-256 hashes; five wrong guesses burn a code.
//!
//! DELIVERY
//! ========
//! With `RESEND_API_KEY` + `RESEND_FROM` set, codes are emailed through
//! Resend. With `EMAIL_CODE_ECHO` on, the code is also returned in the HTTP
//! response so local setups can log in without a mail provider.

use rand::Rng;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::config::env_bool;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;
const EMAIL_AUTH_TEMPLATE: &str = include_str!("../../templates/email_auth.html");

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("no delivery method configured")]
    DeliveryUnavailable,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

/// How access codes reach the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDelivery {
    /// Resend API key and sender address, when email delivery is configured.
    pub resend: Option<(String, String)>,
    /// Return the code in the API response.
    pub echo: bool,
}

impl EmailDelivery {
    /// Read `RESEND_API_KEY`, `RESEND_FROM`, and `EMAIL_CODE_ECHO`.
    #[must_use]
    pub fn from_env() -> Self {
        let key = std::env::var("RESEND_API_KEY").ok().filter(|v| !v.trim().is_empty());
        let from = std::env::var("RESEND_FROM").ok().filter(|v| !v.trim().is_empty());
        Self { resend: key.zip(from), echo: env_bool("EMAIL_CODE_ECHO").unwrap_or(false) }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.resend.is_some() || self.echo
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    if normalized.len() != CODE_LEN || !normalized.bytes().all(|c| CODE_ALPHABET.contains(&c)) {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    let digest = Sha256::digest(code.as_bytes());
    crate::services::session::bytes_to_hex(&digest)
}

/// Default display name for a new account: the mailbox part of the address.
pub(crate) fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("user")
        .to_owned()
}

/// Create (or reuse) the account for `email` and issue a fresh code,
/// invalidating earlier unconsumed ones.
///
/// # Errors
///
/// Returns `InvalidEmail` for malformed addresses or a database error.
pub async fn request_access_code(pool: &PgPool, email: &str) -> Result<(String, String), EmailAuthError> {
    let normalized = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let name = name_from_email(&normalized);

    sqlx::query(
        r"INSERT INTO users (email, name)
          VALUES ($1, $2)
          ON CONFLICT (email) DO NOTHING",
    )
    .bind(&normalized)
    .bind(name)
    .execute(pool)
    .await?;

    sqlx::query("DELETE FROM email_login_codes WHERE email = $1 AND consumed_at IS NULL")
        .bind(&normalized)
        .execute(pool)
        .await?;

    let code = generate_access_code();
    sqlx::query("INSERT INTO email_login_codes (email, code_hash) VALUES ($1, $2)")
        .bind(&normalized)
        .bind(hash_access_code(&code))
        .execute(pool)
        .await?;

    Ok((normalized, code))
}

/// Consume the newest live code for `email` if it matches, returning the user id.
///
/// # Errors
///
/// Returns `VerificationFailed` on a wrong, expired, or exhausted code.
pub async fn verify_access_code(pool: &PgPool, email: &str, code: &str) -> Result<Uuid, EmailAuthError> {
    let normalized_email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let normalized_code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;

    let consumed = sqlx::query(
        r"UPDATE email_login_codes
          SET consumed_at = now()
          WHERE id = (
              SELECT id
              FROM email_login_codes
              WHERE email = $1
                AND consumed_at IS NULL
                AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )
          AND code_hash = $2
          RETURNING id",
    )
    .bind(&normalized_email)
    .bind(hash_access_code(&normalized_code))
    .fetch_optional(pool)
    .await?;

    if consumed.is_none() {
        sqlx::query(
            r"UPDATE email_login_codes
              SET attempts = attempts + 1,
                  consumed_at = CASE WHEN attempts + 1 >= $2 THEN now() ELSE consumed_at END
              WHERE id = (
                  SELECT id
                  FROM email_login_codes
                  WHERE email = $1
                    AND consumed_at IS NULL
                    AND expires_at > now()
                  ORDER BY created_at DESC
                  LIMIT 1
              )",
        )
        .bind(&normalized_email)
        .bind(MAX_FAILED_ATTEMPTS)
        .execute(pool)
        .await?;
        return Err(EmailAuthError::VerificationFailed);
    }

    let user_row = sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(&normalized_email)
        .fetch_optional(pool)
        .await?
        .ok_or(EmailAuthError::VerificationFailed)?;

    Ok(user_row.get("id"))
}

/// Send `code` to `to_email`. Returns the code when echo is enabled.
///
/// # Errors
///
/// Returns `DeliveryUnavailable` when neither Resend nor echo is configured,
/// or `EmailDelivery` when Resend rejects the message.
pub async fn deliver_access_code(
    delivery: &EmailDelivery,
    to_email: &str,
    code: String,
) -> Result<Option<String>, EmailAuthError> {
    if !delivery.is_available() {
        return Err(EmailAuthError::DeliveryUnavailable);
    }
    if let Some((api_key, from)) = &delivery.resend {
        let resend = Resend::new(api_key);
        let html = render_email_auth_template(to_email, &code);
        let email = CreateEmailBaseOptions::new(from, [to_email], "Your Unit Console Access Code").with_html(&html);
        resend
            .emails
            .send(email)
            .await
            .map_err(|e| EmailAuthError::EmailDelivery(e.to_string()))?;
    }
    Ok(delivery.echo.then_some(code))
}

#[must_use]
pub fn render_email_auth_template(email: &str, code: &str) -> String {
    EMAIL_AUTH_TEMPLATE
        .replace("{{EMAIL}}", email)
        .replace("{{CODE}}", code)
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
