//! Subcommands and the arguments they share.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bqnexus_core::filter::StatusFlag;
use bqnexus_core::model::{Cycle, Modality};
use bqnexus_core::{FilterEngine, Readiness};
use bqnexus_sources::{create_source, load_config_from, BqnexusConfig, SourceConfig};

pub mod count;
pub mod generate;
pub mod init;
pub mod modules;
pub mod summary;
pub mod validate;

/// Where to load the question bank from. Flags beat environment and config.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to a local questoes.json
    #[arg(long, conflicts_with = "url")]
    pub data: Option<PathBuf>,

    /// URL of questoes.json, or a base URL serving data/questoes.json
    #[arg(long)]
    pub url: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    fn source_config(&self, config: &BqnexusConfig) -> SourceConfig {
        if let Some(path) = &self.data {
            SourceConfig::File { path: path.clone() }
        } else if let Some(url) = &self.url {
            SourceConfig::Http { url: url.clone() }
        } else {
            config.source.clone()
        }
    }
}

/// Filter selections, applied in the order a user would click them.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Cycle: basico, clinico, internato (English names accepted)
    #[arg(long)]
    pub cycle: Option<Cycle>,

    /// Modality: pbl, tradicional
    #[arg(long)]
    pub modality: Option<Modality>,

    /// Toggle a module of the cycle (repeatable; repeating a module deselects it)
    #[arg(long = "module")]
    pub modules: Vec<String>,

    /// Include unanswered questions
    #[arg(long)]
    pub unanswered: Option<bool>,

    /// Include questions answered wrong
    #[arg(long)]
    pub errors: Option<bool>,

    /// Notebook size (clamped to 5..=100)
    #[arg(long)]
    pub quantity: Option<i64>,

    /// Step the notebook size up or down (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    pub adjust: Vec<i64>,
}

impl FilterArgs {
    pub fn apply(&self, engine: &mut FilterEngine) {
        if let Some(cycle) = self.cycle {
            engine.set_cycle(cycle);
        }
        if let Some(modality) = self.modality {
            engine.set_modality(modality);
        }
        for module in &self.modules {
            engine.toggle_module(module);
        }
        if let Some(on) = self.unanswered {
            engine.set_status(StatusFlag::Unanswered, on);
        }
        if let Some(on) = self.errors {
            engine.set_status(StatusFlag::Errors, on);
        }
        if let Some(quantity) = self.quantity {
            engine.set_quantity(quantity);
        }
        for delta in &self.adjust {
            engine.adjust_quantity(*delta);
        }
    }
}

/// Load config, fetch the catalog, and apply the filters.
pub async fn open_engine(source: &SourceArgs, filter: &FilterArgs) -> Result<FilterEngine> {
    let config = load_config_from(source.config.as_deref())?;
    let catalog_source = create_source(&source.source_config(&config));

    let mut engine = FilterEngine::with_defaults(config.defaults);
    if engine.load(catalog_source.as_ref()).await == Readiness::NotReady {
        anyhow::bail!(
            "question bank not loaded from {}",
            catalog_source.location()
        );
    }

    filter.apply(&mut engine);
    Ok(engine)
}
