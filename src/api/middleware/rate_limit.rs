//! Per-client rate limiting using the token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Rate limiter keyed by the socket peer address.
///
/// Each client gets a bucket of `burst` requests; one token comes back every
/// `replenish_seconds`. With the defaults (1s, burst 10) a client can make
/// 10 requests in a burst and then roughly one per second, i.e. about 10
/// requests per 10 seconds. Excess requests receive `429 Too Many Requests`.
///
/// # Panics
///
/// Panics if `replenish_seconds` or `burst` is zero; [`crate::config::Config::validate`]
/// rejects both.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/r/{reference}", get(redirect_handler))
///     .layer(rate_limit::layer(1, 10));
/// ```
pub fn layer(
    replenish_seconds: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .expect("rate limit settings must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by the client address reported by a
/// trusted reverse proxy (`X-Forwarded-For`, `X-Real-IP`, `Forwarded`),
/// falling back to the peer address.
pub fn proxied_layer(
    replenish_seconds: u64,
    burst: u32,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .expect("rate limit settings must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
