use std::sync::Arc;

use genz_config::Config;
use genz_core::TermStore;
use tokio::sync::RwLock;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Swapped as a whole when the loader finishes
    pub store: RwLock<TermStore>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store: RwLock::new(TermStore::empty()),
            status: AppStatus::new(),
        }
    }

    pub async fn snapshot(&self) -> TermStore {
        self.store.read().await.clone()
    }
}
