//! In-memory snapshot repository.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use crate::domain::aggregate::AggregateState;
use crate::domain::repositories::{SnapshotError, SnapshotRepository};

/// Keeps the latest snapshot in process memory.
///
/// Used by integration tests and for throwaway runs where nothing should
/// touch the disk. Counts saves so callers can assert on persistence.
#[derive(Default)]
pub struct InMemorySnapshotRepository {
    snapshot: Mutex<Option<AggregateState>>,
    saves: AtomicUsize,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        debug!("Using InMemorySnapshotRepository (snapshots are not durable)");
        Self::default()
    }

    /// Starts with `state` already stored, as if loaded from disk.
    pub fn with_snapshot(state: AggregateState) -> Self {
        Self {
            snapshot: Mutex::new(Some(state)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Copy of the last saved snapshot.
    pub fn snapshot(&self) -> Option<AggregateState> {
        self.snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshotRepository {
    async fn load(&self) -> Result<Option<AggregateState>, SnapshotError> {
        Ok(self.snapshot())
    }

    async fn save(&self, state: &AggregateState) -> Result<(), SnapshotError> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(state.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
