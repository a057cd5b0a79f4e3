//! Handler for per-reference scores.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::score::ScoreResponse;
use crate::state::AppState;

/// Returns accepted clicks for a reference and the global total.
///
/// # Endpoint
///
/// `GET /api/score/{reference}`
///
/// # Response
///
/// ```json
/// { "reference": "promo1", "clicks": 3, "total": 7 }
/// ```
///
/// Unknown references return `clicks: 0`, never 404.
pub async fn score_handler(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Json<ScoreResponse> {
    let score = state.click_service.score(&reference).await;

    Json(score.into())
}
