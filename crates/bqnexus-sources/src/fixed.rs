//! Fixed in-memory source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use bqnexus_core::error::LoadError;
use bqnexus_core::traits::CatalogSource;
use bqnexus_core::Catalog;

enum Outcome {
    Catalog(Catalog),
    HttpStatus(u16),
}

/// A source that always returns the same catalog, or always fails with the
/// same HTTP status, without touching the network.
pub struct FixedSource {
    outcome: Outcome,
    call_count: AtomicU32,
}

impl FixedSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            outcome: Outcome::Catalog(catalog),
            call_count: AtomicU32::new(0),
        }
    }

    /// A source whose every fetch fails with `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Outcome::HttpStatus(status),
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogSource for FixedSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn location(&self) -> String {
        "memory".into()
    }

    async fn fetch(&self) -> Result<Catalog, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.outcome {
            Outcome::Catalog(catalog) => Ok(catalog.clone()),
            Outcome::HttpStatus(status) => Err(LoadError::HttpStatus {
                location: self.location(),
                status: *status,
            }),
        }
    }
}
