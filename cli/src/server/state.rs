use std::sync::Arc;

use kitreg_core::ProviderRegistry;

/// Shared application state. Holds no cache of its own: every kit's table
/// lives in its provider.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ProviderRegistry>,
}

impl AppState {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
