//! Handler for referral link clicks.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::net::SocketAddr;

use crate::application::services::ClickOutcome;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Where human visitors land after a click.
pub const SITE_ROOT: &str = "/";

/// Where automated clients are sent, tagged so analytics can separate them.
pub const BOT_LANDING: &str = "/?utm_source=bot";

/// Records a click on a referral link and redirects.
///
/// # Endpoint
///
/// `GET /r/{reference}`
///
/// # Request Flow
///
/// 1. Resolve client address (peer socket, or proxy headers when configured)
/// 2. Bot User-Agents are redirected to [`BOT_LANDING`] without touching state
/// 3. Humans are fingerprinted, deduped and counted; counted clicks are saved
/// 4. Return 302 Found to [`SITE_ROOT`], whether or not the click was counted
///
/// Any reference string is accepted; there is no error path.
pub async fn redirect_handler(
    Path(reference): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    let client_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let client_address = client_ip(&headers, addr, state.behind_proxy);

    let outcome = state
        .click_service
        .record_click(
            &reference,
            Some(client_address),
            client_agent,
            Utc::now().timestamp_millis(),
        )
        .await;

    let location = match outcome {
        ClickOutcome::Bot => BOT_LANDING,
        ClickOutcome::Counted | ClickOutcome::Duplicate => SITE_ROOT,
    };

    (StatusCode::FOUND, [(header::LOCATION, location)])
}
