use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::InsightGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Recruiter commentary backend. Default: `GeminiClient`.
    pub insight: Arc<dyn InsightGenerator>,
}
