//! The filter engine.
//!
//! Owns the catalog and the filter state, recomputes the filtered count on
//! every mutation, and exposes the outputs a front end renders.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::filter::{count_matches, matching, FilterState, StatusFlag, StatusFlags};
use crate::model::{Cycle, Modality, Question};
use crate::notebook::Notebook;
use crate::quantity::Quantity;
use crate::traits::CatalogSource;

/// Initial filter values applied when the engine is created and the
/// catalog finishes loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default)]
    pub cycle: Cycle,
    #[serde(default)]
    pub modality: Modality,
    #[serde(default)]
    pub quantity: Quantity,
    #[serde(default = "default_true")]
    pub unanswered: bool,
    #[serde(default)]
    pub errors: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            cycle: Cycle::default(),
            modality: Modality::default(),
            quantity: Quantity::default(),
            unanswered: true,
            errors: false,
        }
    }
}

/// Whether the catalog has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    NotReady,
    Ready,
}

/// Snapshot of everything a front end displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineView {
    pub readiness: Readiness,
    /// Catalog size after load.
    pub total_questions: usize,
    /// Module enumeration for the active cycle.
    pub modules: Vec<String>,
    pub filtered_count: usize,
    pub can_generate: bool,
    pub filter: FilterState,
    pub quantity: Quantity,
}

/// Single controller for one study session.
#[derive(Debug)]
pub struct FilterEngine {
    catalog: Catalog,
    state: FilterState,
    quantity: Quantity,
    defaults: FilterDefaults,
    readiness: Readiness,
    filtered_count: usize,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::with_defaults(FilterDefaults::default())
    }

    pub fn with_defaults(defaults: FilterDefaults) -> Self {
        let state = FilterState {
            cycle: defaults.cycle,
            modality: defaults.modality,
            status: StatusFlags {
                unanswered: defaults.unanswered,
                errors: defaults.errors,
            },
            ..FilterState::default()
        };

        Self {
            catalog: Catalog::default(),
            state,
            quantity: defaults.quantity,
            defaults,
            readiness: Readiness::NotReady,
            filtered_count: 0,
        }
    }

    /// Fetch the catalog from `source` and install it.
    ///
    /// Failures are logged and leave the engine not ready with an empty
    /// catalog. There is no retry.
    #[instrument(skip(self, source), fields(kind = source.name()))]
    pub async fn load(&mut self, source: &dyn CatalogSource) -> Readiness {
        if self.readiness == Readiness::Ready {
            tracing::warn!("catalog already loaded, ignoring reload");
            return self.readiness;
        }

        match source.fetch().await {
            Ok(catalog) => self.install(catalog),
            Err(e) => {
                tracing::error!(
                    location = %source.location(),
                    "failed to load question bank: {e}"
                );
            }
        }
        self.readiness
    }

    /// Install a decoded catalog in one step and apply the default cycle.
    pub fn install(&mut self, catalog: Catalog) {
        tracing::info!("questions loaded: {}", catalog.record_count());
        self.catalog = catalog;
        self.readiness = Readiness::Ready;
        self.set_cycle(self.defaults.cycle);
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.state
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    // -- inputs -------------------------------------------------------------

    /// Select a cycle. Always clears the module selection.
    pub fn set_cycle(&mut self, cycle: Cycle) {
        self.state.set_cycle(cycle);
        self.refresh();
    }

    pub fn set_modality(&mut self, modality: Modality) {
        self.state.modality = modality;
        self.refresh();
    }

    /// Toggle a module of the active cycle. Returns whether it is now selected.
    pub fn toggle_module(&mut self, module: &str) -> bool {
        let selected = self.state.modules.toggle(module);
        self.refresh();
        selected
    }

    /// Flip a status flag. Returns its new value.
    pub fn toggle_status(&mut self, flag: StatusFlag) -> bool {
        let on = self.state.status.toggle(flag);
        self.refresh();
        on
    }

    pub fn set_status(&mut self, flag: StatusFlag, on: bool) {
        self.state.status.set(flag, on);
        self.refresh();
    }

    pub fn adjust_quantity(&mut self, delta: i64) -> Quantity {
        self.quantity.adjust(delta);
        self.quantity
    }

    pub fn set_quantity(&mut self, value: i64) -> Quantity {
        self.quantity = Quantity::clamped(value);
        self.quantity
    }

    /// Generate a notebook from the current filter, or `None` when
    /// generation is disabled.
    pub fn generate(&self) -> Option<Notebook> {
        if !self.can_generate() {
            tracing::debug!("generate requested with no matching questions");
            return None;
        }

        let notebook = Notebook::generate(
            self.quantity,
            self.filtered_count,
            self.state.cycle,
            self.state.modality,
        );
        tracing::info!(
            id = %notebook.id,
            "notebook generated: {} of {} requested from {} ({})",
            notebook.final_quantity,
            notebook.requested,
            notebook.cycle,
            notebook.modality
        );
        Some(notebook)
    }

    // -- outputs ------------------------------------------------------------

    /// Size of the loaded bank, counting records that can never match.
    pub fn total_questions(&self) -> usize {
        self.catalog.record_count()
    }

    pub fn modules(&self) -> Vec<String> {
        self.catalog.modules_for(self.state.cycle)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    /// Generation is enabled iff something matches.
    pub fn can_generate(&self) -> bool {
        self.filtered_count > 0
    }

    pub fn matching(&self) -> impl Iterator<Item = &Question> {
        matching(&self.catalog, &self.state)
    }

    pub fn view(&self) -> EngineView {
        EngineView {
            readiness: self.readiness,
            total_questions: self.total_questions(),
            modules: self.modules(),
            filtered_count: self.filtered_count,
            can_generate: self.can_generate(),
            filter: self.state.clone(),
            quantity: self.quantity,
        }
    }

    fn refresh(&mut self) {
        self.filtered_count = count_matches(&self.catalog, &self.state);
        tracing::debug!(
            cycle = %self.state.cycle,
            modality = %self.state.modality,
            modules = self.state.modules.len(),
            "filtered count: {}",
            self.filtered_count
        );
    }
}
