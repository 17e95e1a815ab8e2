use std::path::{Path, PathBuf};

use genz_types::TermRecord;

use crate::{SourceError, TermSource};

/// JSON array of term records on disk
#[derive(Debug, Clone)]
pub struct FileTermSource {
    path: PathBuf,
    name: String,
}

impl FileTermSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait::async_trait]
impl TermSource for FileTermSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<TermRecord>, SourceError> {
        let data = tokio::fs::read(&self.path).await?;
        let records: Vec<TermRecord> = serde_json::from_slice(&data)?;
        Ok(records)
    }
}
