mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("database init failed");

    if let Some(email) = config.admin_email.as_deref() {
        match db::bootstrap_admin(&pool, email).await {
            Ok(true) => tracing::info!(%email, "admin account ensured"),
            Ok(false) => tracing::warn!(%email, "ADMIN_EMAIL is not a valid address; skipping"),
            Err(e) => tracing::error!(error = %e, "admin bootstrap failed"),
        }
    }

    let state = state::AppState::new(pool);
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "unit console listening");
    axum::serve(listener, app).await.expect("server failed");
}
