//! Aggregate click state and its persisted snapshot shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::click_event::ClickEvent;

/// Everything the tracker knows: per-reference counters, the global counter
/// and the chronological event log.
///
/// # Invariants
///
/// - `total_clicks == clicks.values().sum()`
/// - `logs` is ordered by insertion, which is chronological order
///
/// Serializes to the snapshot format:
///
/// ```json
/// { "clicks": { "promo1": 3 }, "logs": [ ... ], "totalClicks": 3 }
/// ```
///
/// Every field defaults when absent so snapshots written by older versions
/// (which had no `totalClicks`) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateState {
    #[serde(default)]
    pub clicks: BTreeMap<String, u64>,
    #[serde(default)]
    pub logs: Vec<ClickEvent>,
    #[serde(rename = "totalClicks", default)]
    pub total_clicks: u64,
}

impl AggregateState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted clicks for a reference, zero if it was never clicked.
    pub fn clicks_for(&self, reference: &str) -> u64 {
        self.clicks.get(reference).copied().unwrap_or(0)
    }

    /// Returns `true` if `total_clicks` matches the sum of per-reference counters.
    pub fn is_consistent(&self) -> bool {
        self.clicks.values().sum::<u64>() == self.total_clicks
    }
}
