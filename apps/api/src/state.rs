use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    /// Completion backend. `LlmClient` in production; swapped for a canned provider in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
