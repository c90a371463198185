//! HTTP middleware stack.
//!
//! `Router::layer` wraps what came before, so the last layer applied is the
//! outermost. Tracing goes last and sees every request, including ones that
//! CORS or the timeout short-circuit.

use axum::http::{Method, StatusCode};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Wrap `router` in the tracing, CORS and timeout layers.
pub fn apply_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(build_cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// A wildcard `"*"` allows any origin; otherwise only the parseable
/// origins in the list are allowed.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
