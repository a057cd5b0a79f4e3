//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod leaderboard;
pub mod not_found;
pub mod redirect;
pub mod score;

pub use health::health_handler;
pub use leaderboard::leaderboard_handler;
pub use not_found::not_found_handler;
pub use redirect::redirect_handler;
pub use score::score_handler;
