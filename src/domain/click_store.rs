//! In-memory click store: counters, event log and dedup index.

use crate::domain::aggregate::AggregateState;
use crate::domain::click_event::ClickEvent;
use crate::domain::dedupe::DedupeIndex;
use crate::domain::leaderboard::{LeaderboardEntry, leaderboard};
use crate::domain::retention;

/// Result of offering a click to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Counted: counters incremented and the event appended.
    Counted {
        /// Events dropped by retention right after the append.
        pruned: usize,
    },
    /// Seen within the dedup window; nothing changed.
    Duplicate,
}

impl Acceptance {
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted { .. })
    }
}

/// Point-in-time score for a single reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub reference: String,
    pub clicks: u64,
    pub total: u64,
}

/// Owns the [`AggregateState`] and the dedup index derived from its log.
///
/// All mutation goes through [`ClickStore::record_click`], which takes
/// `&mut self`; callers sharing a store across tasks must hold an exclusive
/// lock for the whole call so the check-then-append is atomic.
#[derive(Debug, Default)]
pub struct ClickStore {
    state: AggregateState,
    index: DedupeIndex,
}

impl ClickStore {
    /// Wraps a loaded state, indexing its log.
    ///
    /// A snapshot whose total disagrees with its counters is repaired by
    /// recomputing the total from the counters.
    pub fn new(mut state: AggregateState) -> Self {
        if !state.is_consistent() {
            let sum = state.clicks.values().sum();
            tracing::warn!(
                "Snapshot totalClicks {} disagrees with counters (sum {}), using sum",
                state.total_clicks,
                sum
            );
            state.total_clicks = sum;
        }

        let index = DedupeIndex::from_log(&state.logs);
        Self { state, index }
    }

    /// Dedups, counts and logs a click, then applies retention.
    pub fn record_click(&mut self, event: ClickEvent) -> Acceptance {
        if self
            .index
            .is_duplicate(&event.reference, &event.fingerprint, event.timestamp)
        {
            return Acceptance::Duplicate;
        }

        *self
            .state
            .clicks
            .entry(event.reference.clone())
            .or_insert(0) += 1;
        self.state.total_clicks += 1;

        self.index.insert(&event);
        self.state.logs.push(event);

        let pruned = retention::prune(&mut self.state.logs);
        if pruned > 0 {
            self.index = DedupeIndex::from_log(&self.state.logs);
        }

        Acceptance::Counted { pruned }
    }

    /// Clicks for `reference` (zero if unknown) alongside the global total.
    pub fn score(&self, reference: &str) -> Score {
        Score {
            reference: reference.to_string(),
            clicks: self.state.clicks_for(reference),
            total: self.state.total_clicks,
        }
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard(&self.state)
    }

    /// Read-only view of the aggregate, used for persistence.
    pub fn state(&self) -> &AggregateState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dedupe::{WINDOW_MS, is_duplicate};
    use crate::domain::retention::{MAX_LOG_LEN, RETAINED_LOG_LEN};

    const T0: i64 = 1_700_000_000_000;

    fn click(reference: &str, ip: &str, ua: &str, ts: i64) -> ClickEvent {
        ClickEvent::new(reference.to_string(), ts, Some(ip.to_string()), Some(ua))
    }

    #[test]
    fn test_first_click_counted() {
        let mut store = ClickStore::default();

        let result = store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0));

        assert!(result.is_counted());
        assert_eq!(
            store.score("promo1"),
            Score {
                reference: "promo1".to_string(),
                clicks: 1,
                total: 1
            }
        );
        assert_eq!(store.state().logs.len(), 1);
    }

    #[test]
    fn test_repeat_within_window_not_counted() {
        let mut store = ClickStore::default();
        store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0));

        let result = store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0 + 5_000));

        assert_eq!(result, Acceptance::Duplicate);
        let score = store.score("promo1");
        assert_eq!((score.clicks, score.total), (1, 1));
        assert_eq!(store.state().logs.len(), 1);
    }

    #[test]
    fn test_repeat_after_window_counted() {
        let mut store = ClickStore::default();
        store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0));

        let result = store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0 + WINDOW_MS));

        assert!(result.is_counted());
        assert_eq!(store.score("promo1").clicks, 2);
    }

    #[test]
    fn test_same_visitor_other_reference_counted() {
        let mut store = ClickStore::default();
        store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0));

        store.record_click(click("promo2", "1.2.3.4", "Mozilla/5.0", T0 + 1));

        let score = store.score("promo2");
        assert_eq!(score.clicks, 1);
        assert_eq!(score.total, 2);
    }

    #[test]
    fn test_unknown_reference_scores_zero() {
        let mut store = ClickStore::default();
        store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0));

        let score = store.score("missing");

        assert_eq!(score.clicks, 0);
        assert_eq!(score.total, 1);
    }

    #[test]
    fn test_leaderboard_from_store() {
        let mut store = ClickStore::default();
        for ip in ["1.1.1.1", "2.2.2.2", "3.3.3.3"] {
            store.record_click(click("promo1", ip, "Mozilla/5.0", T0));
        }
        store.record_click(click("promo2", "1.1.1.1", "Mozilla/5.0", T0));

        let board = store.leaderboard();

        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    reference: "promo1".to_string(),
                    clicks: 3
                },
                LeaderboardEntry {
                    reference: "promo2".to_string(),
                    clicks: 1
                },
            ]
        );
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut store = ClickStore::default();
        for i in 0..50 {
            let ip = format!("10.0.0.{}", i % 7);
            let reference = format!("r{}", i % 3);
            store.record_click(click(&reference, &ip, "ua", T0 + i));
        }

        let state = store.state();
        assert!(state.is_consistent());
        for (reference, count) in &state.clicks {
            let logged = state.logs.iter().filter(|e| &e.reference == reference).count();
            assert_eq!(*count as usize, logged);
        }
    }

    #[test]
    fn test_retention_bound_and_index_rebuild() {
        let mut store = ClickStore::default();
        let mut pruned_total = 0;

        for i in 0..=MAX_LOG_LEN {
            let ip = format!("10.{}.{}.{}", i / 65536, (i / 256) % 256, i % 256);
            match store.record_click(click("bulk", &ip, "ua", T0 + i as i64)) {
                Acceptance::Counted { pruned } => pruned_total += pruned,
                Acceptance::Duplicate => panic!("distinct visitors must be counted"),
            }
            assert!(store.state().logs.len() <= MAX_LOG_LEN);
        }

        assert_eq!(store.state().logs.len(), RETAINED_LOG_LEN);
        assert_eq!(pruned_total, MAX_LOG_LEN + 1 - RETAINED_LOG_LEN);
        assert_eq!(store.score("bulk").clicks, MAX_LOG_LEN as u64 + 1);

        // The very first visitor was pruned, so it can be counted again
        // even though its window has not elapsed.
        let first = click("bulk", "10.0.0.0", "ua", T0 + MAX_LOG_LEN as i64 + 1);
        assert!(!is_duplicate(
            &first.reference,
            &first.fingerprint,
            first.timestamp,
            &store.state().logs
        ));
        assert!(store.record_click(first).is_counted());
    }

    #[test]
    fn test_new_indexes_loaded_log() {
        let mut state = AggregateState::new();
        let event = click("promo1", "1.2.3.4", "Mozilla/5.0", T0);
        state.clicks.insert("promo1".to_string(), 1);
        state.total_clicks = 1;
        state.logs.push(event);

        let mut store = ClickStore::new(state);

        let again = store.record_click(click("promo1", "1.2.3.4", "Mozilla/5.0", T0 + 10));
        assert_eq!(again, Acceptance::Duplicate);
    }

    #[test]
    fn test_new_repairs_inconsistent_total() {
        let mut state = AggregateState::new();
        state.clicks.insert("a".to_string(), 2);
        state.clicks.insert("b".to_string(), 3);
        state.total_clicks = 0;

        let store = ClickStore::new(state);

        assert_eq!(store.score("a").total, 5);
    }
}
