//! HTTP server for the arithmetic API.
//!
//! # Overview
//! Exposes `GET /arithmetic` backed by `arith_core::evaluate`, plus
//! `GET /health`. All validation lives in the core crate; this crate only
//! decodes the query, logs, and maps outcomes to status codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use error::ServerError;

/// Routes only, no middleware.
pub fn app() -> Router {
    Router::new()
        .route("/arithmetic", get(handlers::arithmetic_handler))
        .route("/health", get(handlers::health_handler))
}

/// Routes wrapped in the middleware stack configured by `config`.
pub fn app_with_config(config: &ServerConfig) -> Router {
    middleware::apply_http_layers(app(), config)
}

/// Serve `app()` on `listener` until the returned future is dropped.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve the configured app until `shutdown` resolves, then drain in-flight
/// requests.
pub async fn run_until<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_config(config))
        .with_graceful_shutdown(shutdown)
        .await
}
