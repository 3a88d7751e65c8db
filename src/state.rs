use std::sync::Arc;

use crate::application::services::{ShortenerService, UrlValidator};

/// Shared application state injected into all handlers.
///
/// Services hold their ports as trait objects, so tests can swap in the
/// in-memory store and a stub resolver without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<UrlValidator>,
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(validator: Arc<UrlValidator>, shortener: Arc<ShortenerService>) -> Self {
        Self {
            validator,
            shortener,
        }
    }
}
