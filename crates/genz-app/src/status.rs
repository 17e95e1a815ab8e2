use std::sync::Arc;

use genz_types::{LoadStatus, SearchResults};
use tokio::sync::RwLock;

/// Application status
pub struct AppStatus {
    pub load: Arc<RwLock<LoadStatus>>,
    /// Text of the last query typed, re-run once the store arrives
    pub query: Arc<RwLock<String>>,
    /// Results currently on screen; `:copy N` and `:share N` index into it
    pub results: Arc<RwLock<SearchResults>>,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            load: Arc::new(RwLock::new(LoadStatus::Loading)),
            query: Arc::new(RwLock::new(String::new())),
            results: Arc::new(RwLock::new(SearchResults::default())),
        }
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
