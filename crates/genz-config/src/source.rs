use genz_types::SourceKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DICTIONARY_URL: &str = "https://genz-db.netlify.app/api/dictionary";

fn default_kind() -> SourceKind {
    SourceKind::Bundled
}

fn default_url() -> String {
    DEFAULT_DICTIONARY_URL.to_string()
}

/// Where the term list comes from at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_kind")]
    pub kind: SourceKind,
    /// Endpoint for the remote source, a JSON array of term records
    #[serde(default = "default_url")]
    pub url: String,
    /// JSON file for the file source
    pub path: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            url: default_url(),
            path: None,
        }
    }
}

impl SourceConfig {
    pub fn with_env<F>(mut self, var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(kind) = var("GENZ_SOURCE") {
            match SourceKind::parse(&kind) {
                Some(kind) => self.kind = kind,
                None => tracing::warn!("Ignoring unknown GENZ_SOURCE value: {kind}"),
            }
        }

        if let Some(url) = var("GENZ_URL") {
            self.url = url;
        }

        if let Some(path) = var("GENZ_FILE") {
            self.path = Some(path);
        }

        self
    }
}
