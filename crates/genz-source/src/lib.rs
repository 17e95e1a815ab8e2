mod file;
mod remote;

pub use file::FileTermSource;
pub use remote::RemoteTermSource;

use genz_core::TermStore;
use genz_types::{LoadStatus, TermRecord};

/// Provider of the term list loaded at startup
#[async_trait::async_trait]
pub trait TermSource: Send + Sync {
    /// Short name for logs and status lines
    fn name(&self) -> &str;

    /// Fetch the whole term list once
    async fn fetch(&self) -> Result<Vec<TermRecord>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed term list: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory term list, available without any latency
#[derive(Debug, Clone, Default)]
pub struct StaticTermSource {
    name: String,
    records: Vec<TermRecord>,
}

impl StaticTermSource {
    pub fn new(name: impl Into<String>, records: Vec<TermRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

#[async_trait::async_trait]
impl TermSource for StaticTermSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<TermRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Load boundary: a failed fetch is logged and yields an empty store.
/// No retry.
pub async fn load_store(source: &dyn TermSource) -> TermStore {
    load_with_status(source).await.0
}

pub async fn load_with_status(source: &dyn TermSource) -> (TermStore, LoadStatus) {
    tracing::info!("Loading terms from {}", source.name());

    match source.fetch().await {
        Ok(records) => {
            let count = records.len();
            tracing::info!("Loaded {} terms from {}", count, source.name());
            (TermStore::from_records(records), LoadStatus::Ready { count })
        }
        Err(e) => {
            tracing::error!("Error fetching dictionary from {}: {}", source.name(), e);
            (
                TermStore::empty(),
                LoadStatus::Failed {
                    reason: e.to_string(),
                },
            )
        }
    }
}
