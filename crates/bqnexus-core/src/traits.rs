//! Core trait definitions for catalog sources.
//!
//! Implemented by the `bqnexus-sources` crate (HTTP, file, fixed).

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::error::LoadError;

/// Default location of the question bank, relative to the app root.
pub const DEFAULT_CATALOG_PATH: &str = "data/questoes.json";

/// Something the question catalog can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short source kind (e.g. "http").
    fn name(&self) -> &str;

    /// Where the catalog is fetched from, for logs.
    fn location(&self) -> String;

    /// Fetch and decode the whole catalog. One attempt, no retry.
    async fn fetch(&self) -> Result<Catalog, LoadError>;
}
