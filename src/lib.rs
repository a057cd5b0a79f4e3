//! # Referral Tracker
//!
//! Counts referral-link clicks with per-visitor deduplication and serves a
//! leaderboard, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Bot filter, fingerprinting, dedup window, retention, leaderboard
//! - **Application Layer** ([`application`]) - The click service that owns the aggregate
//! - **Infrastructure Layer** ([`infrastructure`]) - Snapshot persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Click Pipeline
//!
//! `GET /r/{reference}` → bot filter → fingerprint → 24h dedup → count + log →
//! retention → snapshot save → `302` redirect.
//!
//! ## Quick Start
//!
//! ```bash
//! export SNAPSHOT_PATH="data/db.json"   # Optional, defaults to db.json
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ClickOutcome, ClickService};
    pub use crate::domain::aggregate::AggregateState;
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::repositories::SnapshotRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{
        InMemorySnapshotRepository, JsonFileSnapshotRepository,
    };
    pub use crate::state::AppState;
}
