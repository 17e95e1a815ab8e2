use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use genz_config::Config;
use genz_config::source::SourceConfig;
use genz_lang_vietnamese::BundledTerms;
use genz_source::{FileTermSource, RemoteTermSource, TermSource};
use genz_types::SourceKind;

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "genz.json";

/// Resolve the config: an explicit file must load, otherwise `genz.json`
/// in the working directory if present, otherwise defaults. `GENZ_*`
/// variables are applied on top.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    load_config_with(explicit, &PathBuf::from(DEFAULT_CONFIG_FILE), |key| {
        env::var(key).ok()
    })
}

fn load_config_with<F>(explicit: Option<&Path>, fallback: &Path, var: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match explicit {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if fallback.exists() => match Config::load_from_file(fallback) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", fallback.display(), e);
                Config::default()
            }
        },
        None => {
            tracing::debug!("No config file, using defaults");
            Config::default()
        }
    };

    Ok(config.with_env(var))
}

/// Build the term source the config points at
pub fn build_source(config: &SourceConfig) -> anyhow::Result<Box<dyn TermSource>> {
    let source: Box<dyn TermSource> = match config.kind {
        SourceKind::Bundled => Box::new(BundledTerms::source()),
        SourceKind::Remote => Box::new(RemoteTermSource::new(config.url.clone())),
        SourceKind::File => {
            let path = config
                .path
                .as_deref()
                .context("File source needs a path (--file or GENZ_FILE)")?;
            Box::new(FileTermSource::new(path))
        }
    };

    tracing::debug!("Using {} term source", source.name());
    Ok(source)
}
