use crate::core::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Immutable runtime configuration shared by every handler.
    /// Used to locate the receipt output directory.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
