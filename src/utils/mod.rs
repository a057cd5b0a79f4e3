//! Request helpers shared by handlers.
//!
//! - [`client_ip`] - Client address extraction (socket or trusted proxy headers)

pub mod client_ip;
