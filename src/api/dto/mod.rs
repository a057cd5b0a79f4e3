//! Data Transfer Objects for API responses and query parameters.
//!
//! All DTOs use Serde for JSON serialization.

pub mod health;
pub mod leaderboard;
pub mod score;
