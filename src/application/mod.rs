//! Application layer services.
//!
//! Services own domain state and coordinate it with repository traits,
//! giving HTTP handlers and the admin tool a small async API.
//!
//! # Available Services
//!
//! - [`services::click_service::ClickService`] - Click recording, scoring and leaderboard
pub mod services;
