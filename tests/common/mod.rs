#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use std::sync::Arc;

use shorturl::application::services::{ShortenerService, UrlValidator};
use shorturl::api::handlers::{health_handler, redirect_handler, shorten_handler};
use shorturl::domain::resolver::NameResolver;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::state::AppState;

/// Resolver stub: every hostname resolves except those under the reserved
/// `.invalid` TLD, which lets tests exercise the unresolvable-host path
/// without touching the network.
pub struct StubResolver;

#[async_trait]
impl NameResolver for StubResolver {
    async fn resolve(&self, hostname: &str) -> bool {
        !hostname.ends_with(".invalid")
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repo = Arc::new(InMemoryMappingRepository::new());

    let validator = Arc::new(UrlValidator::new(Arc::new(StubResolver)));
    let shortener = Arc::new(ShortenerService::new(repo.clone()));

    (AppState::new(validator, shortener), repo)
}

/// Test server with all service routes and an empty in-memory store.
pub fn test_server() -> (TestServer, Arc<InMemoryMappingRepository>) {
    let (state, repo) = create_test_state();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/shorturl", post(shorten_handler))
        .route("/api/shorturl/{id}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repo)
}
