//! DTO for a single reference score.

use serde::Serialize;

use crate::domain::click_store::Score;

/// Clicks for one reference alongside the global total.
///
/// ```json
/// { "reference": "promo1", "clicks": 3, "total": 7 }
/// ```
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub reference: String,
    pub clicks: u64,
    pub total: u64,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            reference: score.reference,
            clicks: score.clicks,
            total: score.total,
        }
    }
}
