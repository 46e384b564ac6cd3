use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing request-scoped lives here.
#[derive(Clone)]
pub struct AppState {
    pub model: ModelClient,
    pub config: Config,
}
