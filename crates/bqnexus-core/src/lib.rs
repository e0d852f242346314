//! bqnexus-core — Question catalog, filter engine, and notebook generation.
//!
//! This crate holds the pure state and query layer of bqnexus: the record
//! model, the filter predicate, and the [`engine::FilterEngine`] controller
//! that front ends drive.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod notebook;
pub mod quantity;
pub mod traits;

pub use catalog::Catalog;
pub use engine::{EngineView, FilterDefaults, FilterEngine, Readiness};
pub use error::LoadError;
pub use model::{Cycle, Modality, Question, Status};
