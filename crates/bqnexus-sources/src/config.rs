//! Source configuration and factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bqnexus_core::engine::FilterDefaults;
use bqnexus_core::traits::{CatalogSource, DEFAULT_CATALOG_PATH};

use crate::file::FileSource;
use crate::http::HttpSource;

/// Where the question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    File {
        #[serde(default = "default_catalog_path")]
        path: PathBuf,
    },
    Http {
        url: String,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::File {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

/// Top-level bqnexus configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BqnexusConfig {
    #[serde(default)]
    pub source: SourceConfig,
    /// Initial filter values.
    #[serde(default)]
    pub defaults: FilterDefaults,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_source_config(config: &SourceConfig) -> SourceConfig {
    match config {
        SourceConfig::File { path } => SourceConfig::File {
            path: PathBuf::from(resolve_env_vars(&path.to_string_lossy())),
        },
        SourceConfig::Http { url } => SourceConfig::Http {
            url: resolve_env_vars(url),
        },
    }
}

/// Apply `BQNEXUS_DATA_URL` / `BQNEXUS_DATA_PATH` overrides. The URL wins
/// when both are set.
fn apply_env_overrides(config: &mut BqnexusConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(path) = var("BQNEXUS_DATA_PATH") {
        config.source = SourceConfig::File {
            path: PathBuf::from(path),
        };
    }
    if let Some(url) = var("BQNEXUS_DATA_URL") {
        config.source = SourceConfig::Http { url };
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `bqnexus.toml` in the current directory
/// 2. `~/.config/bqnexus/config.toml`
///
/// Environment variable overrides: `BQNEXUS_DATA_URL`, `BQNEXUS_DATA_PATH`.
pub fn load_config() -> Result<BqnexusConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<BqnexusConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("bqnexus.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<BqnexusConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            config
        }
        None => BqnexusConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config.source = resolve_source_config(&config.source);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("bqnexus"))
}

/// Create a catalog source from its configuration.
pub fn create_source(config: &SourceConfig) -> Box<dyn CatalogSource> {
    match config {
        SourceConfig::File { path } => Box::new(FileSource::new(path.clone())),
        SourceConfig::Http { url } => Box::new(HttpSource::new(url)),
    }
}
