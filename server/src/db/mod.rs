//! Database initialization, migrations, and admin bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to create the shared SQLx pool and enforce schema
//! migrations before accepting API traffic. A fresh database has no admin,
//! so `ADMIN_EMAIL` names the account to create (or promote) as one.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::services::email_auth;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(db_max_connections())
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}

/// Ensure the account for `email` exists with the `admin` role.
///
/// Returns `false` without touching the database when `email` is not a
/// valid address.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub async fn bootstrap_admin(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    let Some(normalized) = email_auth::normalize_email(email) else {
        return Ok(false);
    };
    let name = email_auth::name_from_email(&normalized);

    sqlx::query(
        r"INSERT INTO users (email, name, role)
          VALUES ($1, $2, 'admin')
          ON CONFLICT (email) DO UPDATE SET role = 'admin'",
    )
    .bind(&normalized)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(true)
}
