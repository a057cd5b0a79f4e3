//! Infrastructure layer for external integrations.
//!
//! Implements the persistence port defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Snapshot repositories (JSON file and in-memory)

pub mod persistence;
