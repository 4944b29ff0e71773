//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`            - Create a short link (rate limited)
//! - `GET  /{code}`             - Short link redirect
//! - `GET  /stats/{code}`       - Link record + recent clicks
//! - `POST /activate/{code}`    - Re-enable a link (rate limited)
//! - `POST /deactivate/{code}`  - Disable a link (rate limited)
//! - `GET  /health`             - Component health check
//!
//! Trailing slashes are normalized away, so `/stats/{code}/` and
//! `/activate/{code}/` also resolve.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the mutating endpoints

use crate::api::handlers::{
    activate_handler, deactivate_handler, health_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let mutating = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/activate/{code}", post(activate_handler))
        .route("/deactivate/{code}", post(deactivate_handler));

    let mutating = if behind_proxy {
        mutating.layer(rate_limit::proxy_layer())
    } else {
        mutating.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(mutating)
        .route("/health", get(health_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
