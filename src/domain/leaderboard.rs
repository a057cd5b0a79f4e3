//! Ranked view over per-reference counters.

use crate::domain::aggregate::AggregateState;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub reference: String,
    pub clicks: u64,
}

/// Ranks every known reference by accepted clicks, highest first.
///
/// Ties keep ascending reference order: counters live in a `BTreeMap` and
/// `sort_by` is stable, so equal counts come out alphabetically.
pub fn leaderboard(state: &AggregateState) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = state
        .clicks
        .iter()
        .map(|(reference, clicks)| LeaderboardEntry {
            reference: reference.clone(),
            clicks: *clicks,
        })
        .collect();

    entries.sort_by(|a, b| b.clicks.cmp(&a.clicks));
    entries
}
