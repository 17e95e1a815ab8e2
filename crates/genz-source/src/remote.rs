use genz_types::TermRecord;

use crate::{SourceError, TermSource};

/// Single GET against the dictionary API. No auth, no paging, no retry.
#[derive(Clone)]
pub struct RemoteTermSource {
    client: reqwest::Client,
    url: String,
}

impl RemoteTermSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait::async_trait]
impl TermSource for RemoteTermSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<TermRecord>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let records: Vec<TermRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }
}
