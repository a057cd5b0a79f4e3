//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ClickService;

/// State shared by every request.
///
/// Cloning is cheap: the click service is reference-counted and owns the
/// aggregate behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub click_service: Arc<ClickService>,
    /// Read the client address from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(click_service: Arc<ClickService>, behind_proxy: bool) -> Self {
        Self {
            click_service,
            behind_proxy,
        }
    }
}
