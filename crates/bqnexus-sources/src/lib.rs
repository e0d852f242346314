//! bqnexus-sources — Where the question bank comes from.
//!
//! Implements the `CatalogSource` trait for HTTP and local files, plus a
//! fixed in-memory source for tests, and the `bqnexus.toml` configuration
//! that picks between them.

pub mod config;
pub mod file;
pub mod fixed;
pub mod http;

pub use config::{create_source, load_config, load_config_from, BqnexusConfig, SourceConfig};
pub use file::FileSource;
pub use fixed::FixedSource;
pub use http::HttpSource;
