use crate::config::Config;
use crate::tools::Toolkit;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Posting table plus the configured skill extractor.
    pub toolkit: Toolkit,
    pub config: Config,
}
