//! Rolling-window duplicate detection.
//!
//! A click is a duplicate when the log already holds an event with the same
//! reference and fingerprint less than [`WINDOW_MS`] before it. Two
//! implementations answer that question:
//!
//! - [`is_duplicate`] scans the log directly
//! - [`DedupeIndex`] keeps the most recent timestamp per `(reference, fingerprint)`
//!
//! The index must be rebuilt whenever the log is pruned so both always agree.

use std::collections::HashMap;

use crate::domain::click_event::ClickEvent;

/// Dedup window: 24 hours in milliseconds.
pub const WINDOW_MS: i64 = 24 * 3600 * 1000;

/// Returns `true` if `log` holds an event for the same reference and
/// fingerprint with `now - event.timestamp < WINDOW_MS`.
///
/// Existence is all that matters; the scan stops at the first match.
pub fn is_duplicate(reference: &str, fingerprint: &str, now: i64, log: &[ClickEvent]) -> bool {
    log.iter().any(|e| {
        e.reference == reference
            && e.fingerprint == fingerprint
            && now.saturating_sub(e.timestamp) < WINDOW_MS
    })
}

/// Index of the latest timestamp seen per `(reference, fingerprint)` pair.
///
/// The latest timestamp minimises `now - ts`, so checking it alone answers the
/// same existence question as [`is_duplicate`] without a linear scan.
#[derive(Debug, Default, Clone)]
pub struct DedupeIndex {
    latest: HashMap<(String, String), i64>,
}

impl DedupeIndex {
    /// Builds an index from an existing log.
    pub fn from_log(log: &[ClickEvent]) -> Self {
        let mut index = Self::default();
        for event in log {
            index.insert(event);
        }
        index
    }

    /// Records an event, keeping the larger timestamp on conflict.
    pub fn insert(&mut self, event: &ClickEvent) {
        self.latest
            .entry((event.reference.clone(), event.fingerprint.clone()))
            .and_modify(|ts| *ts = (*ts).max(event.timestamp))
            .or_insert(event.timestamp);
    }

    /// Index-backed equivalent of [`is_duplicate`].
    pub fn is_duplicate(&self, reference: &str, fingerprint: &str, now: i64) -> bool {
        self.latest
            .get(&(reference.to_string(), fingerprint.to_string()))
            .is_some_and(|ts| now.saturating_sub(*ts) < WINDOW_MS)
    }

    /// Number of distinct `(reference, fingerprint)` pairs tracked.
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}
