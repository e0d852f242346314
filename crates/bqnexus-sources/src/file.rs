//! Local file catalog source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::instrument;

use bqnexus_core::error::LoadError;
use bqnexus_core::traits::CatalogSource;
use bqnexus_core::Catalog;

/// Reads the catalog from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<Catalog, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.location(),
                source,
            })?;

        let catalog = Catalog::from_slice(&bytes)?;
        tracing::debug!("read {} questions", catalog.len());
        Ok(catalog)
    }
}
