use std::sync::Arc;

use crate::services::CompletionProvider;

/// Shared application state
///
/// Holds only the upstream provider handle; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
