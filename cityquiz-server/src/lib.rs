//! CITYQUIZ Server - HTTP API for the browser front end
//!
//! This crate provides the web backend:
//! - REST API for the round lifecycle (new round, guess, check, reveal)
//! - Static file serving for the front end

mod routes;
mod state;

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8003,
            static_dir: "web".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Round lifecycle
        .route("/api/round", get(routes::round::get_round))
        .route("/api/round/new", post(routes::round::new_round))
        .route("/api/round/guess", post(routes::round::set_guess))
        .route("/api/round/check", post(routes::round::check_round))
        .route("/api/round/reveal", post(routes::round::reveal_round))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig, state: Arc<ServerState>) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(&config, state);

    tracing::info!("CITYQUIZ server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
