//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::StoreStats;
use crate::domain::retention::MAX_LOG_LEN;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "2 references, 4 total clicks, 4 log entries"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state.click_service.stats().await);

    let all_healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports store size; a log beyond the retention bound means pruning broke.
fn check_store(stats: &StoreStats) -> CheckStatus {
    let summary = format!(
        "{} references, {} total clicks, {} log entries",
        stats.references, stats.total_clicks, stats.log_entries
    );

    if stats.log_entries > MAX_LOG_LEN {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Event log exceeds retention bound: {}", summary)),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(summary),
        }
    }
}
