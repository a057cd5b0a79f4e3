//! Click recording and scoring service.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::aggregate::AggregateState;
use crate::domain::bot_filter::is_bot;
use crate::domain::click_event::ClickEvent;
use crate::domain::click_store::{Acceptance, ClickStore, Score};
use crate::domain::leaderboard::LeaderboardEntry;
use crate::domain::repositories::SnapshotRepository;

/// What happened to an offered click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Counted and persisted (or persistence was attempted).
    Counted,
    /// Same visitor clicked the same reference within the dedup window.
    Duplicate,
    /// Automated client; state untouched.
    Bot,
}

/// Summary of the store used by health checks and the admin tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub references: usize,
    pub total_clicks: u64,
    pub log_entries: usize,
}

impl StoreStats {
    pub fn from_state(state: &AggregateState) -> Self {
        Self {
            references: state.clicks.len(),
            total_clicks: state.total_clicks,
            log_entries: state.logs.len(),
        }
    }
}

/// Sole owner of the click aggregate.
///
/// Mutations take the write lock for the whole dedup-count-append-prune-save
/// sequence, so two identical concurrent clicks can never both be counted and
/// snapshots are written in mutation order. Reads share the lock and never
/// observe a half-applied click.
pub struct ClickService {
    store: RwLock<ClickStore>,
    repository: Arc<dyn SnapshotRepository>,
}

impl ClickService {
    /// Creates a service around an already loaded state.
    pub fn new(state: AggregateState, repository: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            store: RwLock::new(ClickStore::new(state)),
            repository,
        }
    }

    /// Loads the last snapshot from `repository` and builds the service.
    ///
    /// Never fails: a missing snapshot starts empty, and an unreadable one is
    /// logged and replaced by an empty state.
    pub async fn load(repository: Arc<dyn SnapshotRepository>) -> Self {
        let state = match repository.load().await {
            Ok(Some(state)) => {
                tracing::info!(
                    "Loaded snapshot: {} references, {} total clicks, {} log entries",
                    state.clicks.len(),
                    state.total_clicks,
                    state.logs.len()
                );
                state
            }
            Ok(None) => {
                tracing::info!("No snapshot found, starting empty");
                AggregateState::new()
            }
            Err(e) => {
                tracing::warn!("Failed to load snapshot: {}. Starting empty.", e);
                AggregateState::new()
            }
        };

        Self::new(state, repository)
    }

    /// Records a click on `reference` at `now` (ms since epoch).
    ///
    /// Bots are rejected before fingerprinting. Counted clicks are saved
    /// before this returns; a failed save is logged and does not undo the
    /// in-memory update, so the next successful save carries it.
    pub async fn record_click(
        &self,
        reference: &str,
        client_address: Option<String>,
        client_agent: Option<&str>,
        now: i64,
    ) -> ClickOutcome {
        if is_bot(client_agent.unwrap_or_default()) {
            tracing::debug!(reference, "Bot click ignored");
            metrics::counter!("clicks_bot_total").increment(1);
            return ClickOutcome::Bot;
        }

        let event = ClickEvent::new(reference.to_string(), now, client_address, client_agent);
        let fingerprint = event.fingerprint.clone();

        let mut store = self.store.write().await;

        match store.record_click(event) {
            Acceptance::Duplicate => {
                tracing::debug!(reference, fingerprint = %fingerprint, "Duplicate click within window");
                metrics::counter!("clicks_duplicate_total").increment(1);
                ClickOutcome::Duplicate
            }
            Acceptance::Counted { pruned } => {
                tracing::debug!(reference, fingerprint = %fingerprint, "Click counted");
                metrics::counter!("clicks_counted_total").increment(1);

                if pruned > 0 {
                    tracing::info!("Pruned {} old log entries", pruned);
                    metrics::counter!("log_pruned_entries_total").increment(pruned as u64);
                }

                if let Err(e) = self.repository.save(store.state()).await {
                    tracing::error!("Failed to save snapshot: {}", e);
                    metrics::counter!("snapshot_save_failures_total").increment(1);
                }

                ClickOutcome::Counted
            }
        }
    }

    /// Current score for `reference`; unknown references score zero.
    pub async fn score(&self, reference: &str) -> Score {
        self.store.read().await.score(reference)
    }

    /// References ranked by clicks, highest first, ties alphabetical.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.store.read().await.leaderboard()
    }

    pub async fn stats(&self) -> StoreStats {
        StoreStats::from_state(self.store.read().await.state())
    }
}
