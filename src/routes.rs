//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /r/{reference}` - Record a referral click and redirect
//! - `GET /api/*`         - Score and leaderboard JSON API
//! - `GET /health`        - Health check
//! - anything else        - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (proxy-aware when configured)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Rate limit applied to every route.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub replenish_seconds: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - per-client token bucket settings
///
/// When `state.behind_proxy` is `true`, rate limiting keys on the client
/// address from proxy headers instead of the peer socket address.
pub fn app_router(state: AppState, limits: RateLimit) -> NormalizePath<Router> {
    let behind_proxy = state.behind_proxy;

    let router = Router::new()
        .route("/r/{reference}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .with_state(state);

    let router = if behind_proxy {
        router.layer(rate_limit::proxied_layer(limits.replenish_seconds, limits.burst))
    } else {
        router.layer(rate_limit::layer(limits.replenish_seconds, limits.burst))
    };

    let router = router.layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
