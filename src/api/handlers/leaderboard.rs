//! Handler for the click leaderboard.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::leaderboard::{LeaderboardItem, LeaderboardQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists references ranked by accepted clicks, highest first.
///
/// # Endpoint
///
/// `GET /api/leaderboard`
///
/// # Query Parameters
///
/// - `limit` (optional): Keep only the top N entries (1-1000)
///
/// # Response
///
/// ```json
/// [ { "reference": "promo1", "clicks": 3 }, { "reference": "promo2", "clicks": 1 } ]
/// ```
///
/// Equal counts are ordered by reference, ascending.
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is out of range.
pub async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardItem>>, AppError> {
    let limit = params
        .validate()
        .map_err(|e| AppError::bad_request(e, json!({ "limit": params.limit })))?;

    let entries = state.click_service.leaderboard().await;

    let items = entries
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(LeaderboardItem::from)
        .collect();

    Ok(Json(items))
}
