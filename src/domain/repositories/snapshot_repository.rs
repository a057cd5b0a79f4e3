//! Persistence port for the aggregate click state.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::aggregate::AggregateState;

/// Errors raised while loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable storage for [`AggregateState`].
///
/// The tracker loads once at startup and saves after every counted click.
/// Implementations only move whole snapshots; they never interpret them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileSnapshotRepository`] - JSON file on disk
/// - [`crate::infrastructure::persistence::InMemorySnapshotRepository`] - process memory, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(state))` if a snapshot exists
    /// - `Ok(None)` if nothing was ever saved
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] if the stored data cannot be parsed.
    /// Returns [`SnapshotError::Io`] if the storage cannot be read.
    async fn load(&self) -> Result<Option<AggregateState>, SnapshotError>;

    /// Replaces the stored snapshot with `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the snapshot could not be written.
    async fn save(&self, state: &AggregateState) -> Result<(), SnapshotError>;
}
