use std::path::Path;

use serde::{Deserialize, Serialize};

use self::source::SourceConfig;
use self::ui::{ColorChoice, UiConfig};

pub mod source;
pub mod ui;

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub ui: UiConfig,

    /// `tracing` filter directive, `RUST_LOG` wins when set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            ui: UiConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Config {
    /// Apply `GENZ_*` overrides looked up through `var`
    pub fn with_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.source = self.source.with_env(&var);

        if let Some(filter) = var("GENZ_LOG") {
            self.log_filter = filter;
        }

        if let Some(color) = var("GENZ_COLOR") {
            match ColorChoice::parse(&color) {
                Some(choice) => self.ui.color = choice,
                None => tracing::warn!("Ignoring unknown GENZ_COLOR value: {color}"),
            }
        }

        self
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use genz_types::SourceKind;

    use super::*;
    use crate::source::DEFAULT_DICTIONARY_URL;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.kind, SourceKind::Bundled);
        assert_eq!(config.source.url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.source.path, None);
        assert_eq!(config.ui.color, ColorChoice::Auto);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_env(env_of(&[
            ("GENZ_SOURCE", "remote"),
            ("GENZ_URL", "http://localhost:9000/terms"),
            ("GENZ_LOG", "debug"),
            ("GENZ_COLOR", "never"),
        ]));

        assert_eq!(config.source.kind, SourceKind::Remote);
        assert_eq!(config.source.url, "http://localhost:9000/terms");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.ui.color, ColorChoice::Never);
    }

    #[test]
    fn test_unknown_env_values_are_ignored() {
        let config = Config::default().with_env(env_of(&[
            ("GENZ_SOURCE", "carrier-pigeon"),
            ("GENZ_COLOR", "rainbow"),
        ]));
        assert_eq!(config.source.kind, SourceKind::Bundled);
        assert_eq!(config.ui.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"source":{"kind":"file","path":"terms.json"}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.path.as_deref(), Some("terms.json"));
        assert_eq!(config.source.url, DEFAULT_DICTIONARY_URL);
        assert!(config.ui.show_tags);
    }

    #[test]
    fn test_load_missing_and_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Config::load_from_file(&missing),
            Err(ConfigError::NotFound(_))
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from_file(&broken),
            Err(ConfigError::Parse(_))
        ));
    }
}
