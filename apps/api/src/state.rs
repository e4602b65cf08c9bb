use std::sync::Arc;

use crate::config::Config;
use crate::ner_client::EntityTagger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity tagger, built once at startup and only ever read afterwards.
    /// Tests swap in a stub.
    pub tagger: Arc<dyn EntityTagger>,
}

impl AppState {
    pub fn new(config: Config, tagger: Arc<dyn EntityTagger>) -> Self {
        Self { config, tagger }
    }
}
