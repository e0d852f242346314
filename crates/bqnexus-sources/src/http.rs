//! HTTP catalog source.

use async_trait::async_trait;
use tracing::instrument;

use bqnexus_core::error::LoadError;
use bqnexus_core::traits::{CatalogSource, DEFAULT_CATALOG_PATH};
use bqnexus_core::Catalog;

/// Fetches `questoes.json` over HTTP. No timeout is applied.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// `url` is either the full catalog URL (ending in `.json`) or a base
    /// URL, in which case `data/questoes.json` is appended.
    pub fn new(url: &str) -> Self {
        let url = if url.ends_with(".json") {
            url.to_string()
        } else {
            format!("{}/{}", url.trim_end_matches('/'), DEFAULT_CATALOG_PATH)
        };

        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Catalog, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Transport {
                location: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                location: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LoadError::Transport {
            location: self.url.clone(),
            message: format!("failed to read body: {e}"),
        })?;

        let catalog = Catalog::from_slice(&body)?;
        tracing::debug!("fetched {} questions", catalog.len());
        Ok(catalog)
    }
}
