// Liveness endpoint for the hosting platform.
//
// Runs on its own task and shares nothing with the bot; both routes always
// answer 200 as long as the process is up.

use axum::{http::StatusCode, routing::get, Router};
use std::net::SocketAddr;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
}

async fn home() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Bot is running!")
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Bind `0.0.0.0:port` and serve until the process exits.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Health server listening on {}", addr);

    axum::serve(listener, router()).await?;
    Ok(())
}
