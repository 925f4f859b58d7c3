use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::render::Pages;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Production: `LlmClient`. Tests swap in a stub.
    pub llm: Arc<dyn CompletionClient>,
    pub pages: Pages,
}

/// State for a server started without an API key. There is no completion
/// client here, so no handler can reach the provider.
#[derive(Clone)]
pub struct UnconfiguredState {
    pub pages: Pages,
    pub notice: String,
}
