//! API route configuration.

use crate::api::handlers::{leaderboard_handler, score_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only JSON API routes.
///
/// # Endpoints
///
/// - `GET /score/{reference}` - Clicks for one reference plus the global total
/// - `GET /leaderboard`       - References ranked by clicks
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/score/{reference}", get(score_handler))
        .route("/leaderboard", get(leaderboard_handler))
}
