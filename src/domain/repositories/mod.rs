//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.

pub mod snapshot_repository;

pub use snapshot_repository::{SnapshotError, SnapshotRepository};

#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
