//! Bounded retention for the event log.
//!
//! Pruning may drop events that are still inside an active dedup window; the
//! pair they guarded can then be counted again. That is accepted in exchange
//! for bounded memory and snapshot size.

use crate::domain::click_event::ClickEvent;

/// Log length above which pruning kicks in.
pub const MAX_LOG_LEN: usize = 5000;

/// Number of most recent events kept after a prune.
pub const RETAINED_LOG_LEN: usize = 4000;

/// Drops the oldest events when the log grows past [`MAX_LOG_LEN`], keeping
/// the newest [`RETAINED_LOG_LEN`] in chronological order.
///
/// Returns the number of events removed.
pub fn prune(log: &mut Vec<ClickEvent>) -> usize {
    if log.len() <= MAX_LOG_LEN {
        return 0;
    }

    let excess = log.len() - RETAINED_LOG_LEN;
    log.drain(..excess);
    excess
}
