//! Snapshot repository implementations.
//!
//! # Repositories
//!
//! - [`JsonFileSnapshotRepository`] - Pretty-printed JSON file, replaced atomically on save
//! - [`InMemorySnapshotRepository`] - Keeps the last snapshot in memory (tests, ephemeral runs)

pub mod json_file_snapshot_repository;
pub mod memory_snapshot_repository;

pub use json_file_snapshot_repository::JsonFileSnapshotRepository;
pub use memory_snapshot_repository::InMemorySnapshotRepository;
