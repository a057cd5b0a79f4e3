//! DTOs for the leaderboard endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::leaderboard::LeaderboardEntry;

/// Upper bound accepted for the `limit` query parameter.
pub const MAX_LEADERBOARD_LIMIT: usize = 1000;

/// Query parameters for `GET /api/leaderboard`.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    /// Return only the top `limit` entries; all entries when absent.
    pub limit: Option<usize>,
}

impl LeaderboardQuery {
    /// Checks `limit` is within `1..=MAX_LEADERBOARD_LIMIT`.
    pub fn validate(&self) -> Result<Option<usize>, String> {
        match self.limit {
            Some(0) => Err("limit must be at least 1".to_string()),
            Some(n) if n > MAX_LEADERBOARD_LIMIT => Err(format!(
                "limit must not exceed {}",
                MAX_LEADERBOARD_LIMIT
            )),
            other => Ok(other),
        }
    }
}

/// One ranked reference.
#[derive(Debug, Serialize)]
pub struct LeaderboardItem {
    pub reference: String,
    pub clicks: u64,
}

impl From<LeaderboardEntry> for LeaderboardItem {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            reference: entry.reference,
            clicks: entry.clicks,
        }
    }
}
