//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::TransitDataset;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Classified dataset, built before the server starts
    pub dataset: Arc<TransitDataset>,
}

impl AppState {
    pub fn new(dataset: TransitDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
