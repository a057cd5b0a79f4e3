#![allow(dead_code)]

use axum::extract::ConnectInfo;
use referral_tracker::application::services::ClickService;
use referral_tracker::domain::aggregate::AggregateState;
use referral_tracker::infrastructure::persistence::InMemorySnapshotRepository;
use referral_tracker::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BROWSER_UA: &str = "Mozilla/5.0";

/// Injects a fixed peer address, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// State over an in-memory repository; `behind_proxy` lets tests vary the
/// client address through `X-Forwarded-For`.
pub fn create_test_state(behind_proxy: bool) -> (AppState, Arc<InMemorySnapshotRepository>) {
    create_test_state_with(AggregateState::new(), behind_proxy)
}

pub fn create_test_state_with(
    state: AggregateState,
    behind_proxy: bool,
) -> (AppState, Arc<InMemorySnapshotRepository>) {
    let repo = Arc::new(InMemorySnapshotRepository::new());
    let click_service = Arc::new(ClickService::new(state, repo.clone()));

    (AppState::new(click_service, behind_proxy), repo)
}

pub fn state_with_counts(counts: &[(&str, u64)]) -> AggregateState {
    let mut state = AggregateState::new();
    for (reference, clicks) in counts {
        state.clicks.insert(reference.to_string(), *clicks);
        state.total_clicks += clicks;
    }
    state
}
