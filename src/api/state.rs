use std::sync::Arc;

use crate::storage::MatchDataset;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<MatchDataset>,
    /// Allowed CORS origin, or "*" for any
    pub cors_origin: String,
}

impl AppState {
    pub fn new(dataset: MatchDataset, cors_origin: impl Into<String>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            cors_origin: cors_origin.into(),
        }
    }
}
