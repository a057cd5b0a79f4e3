//! Domain layer containing the click-recording logic.
//!
//! Everything here is synchronous and free of I/O, so each decision can be
//! tested without an HTTP context.
//!
//! # Architecture
//!
//! - [`bot_filter`] - Classifies a User-Agent as human or automated
//! - [`fingerprint`] - Derives a short visitor identifier from address + agent
//! - [`dedupe`] - 24-hour dedup window over the event log
//! - [`retention`] - Bounds the event log
//! - [`leaderboard`] - Ranks references by clicks
//! - [`click_store`] - Counters, log and index mutated as one unit
//! - [`repositories`] - Persistence port implemented by the infrastructure layer
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler extracts client address and User-Agent
//! 2. [`bot_filter::is_bot`] short-circuits automated traffic
//! 3. [`click_event::ClickEvent::new`] fingerprints the visitor
//! 4. [`click_store::ClickStore::record_click`] dedups, counts, appends and prunes
//! 5. The snapshot is saved via [`repositories::SnapshotRepository`]

pub mod aggregate;
pub mod bot_filter;
pub mod click_event;
pub mod click_store;
pub mod dedupe;
pub mod fingerprint;
pub mod leaderboard;
pub mod repositories;
pub mod retention;
