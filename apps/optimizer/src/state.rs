use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; every request works on its own locally owned data.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
