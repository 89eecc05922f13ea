use mindwell_support::language::Language;

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub default_language: Language,
}

impl From<&ApiConfig> for AppState {
    fn from(config: &ApiConfig) -> Self {
        Self {
            default_language: config.default_language,
        }
    }
}
