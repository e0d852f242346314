//! Filter state and the match predicate.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Cycle, Modality, Question, Status};

/// Module labels chosen for the active cycle.
///
/// Empty means "no module restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModuleSelection {
    modules: BTreeSet<String>,
}

impl ModuleSelection {
    /// Add the label if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, module: &str) -> bool {
        if self.modules.remove(module) {
            false
        } else {
            self.modules.insert(module.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains(module)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    /// Empty selection admits every module.
    pub fn admits(&self, module: &str) -> bool {
        self.is_empty() || self.contains(module)
    }
}

/// One of the independent answer-status toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFlag {
    Unanswered,
    Errors,
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFlag::Unanswered => write!(f, "unanswered"),
            StatusFlag::Errors => write!(f, "errors"),
        }
    }
}

impl FromStr for StatusFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unanswered" | "nao-respondidas" => Ok(StatusFlag::Unanswered),
            "errors" | "error" | "erros" => Ok(StatusFlag::Errors),
            other => Err(format!("unknown status flag: {other}")),
        }
    }
}

/// Which answer states are included.
///
/// The flags are OR-composed: with both off nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFlags {
    pub unanswered: bool,
    pub errors: bool,
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self {
            unanswered: true,
            errors: false,
        }
    }
}

impl StatusFlags {
    pub fn get(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Unanswered => self.unanswered,
            StatusFlag::Errors => self.errors,
        }
    }

    pub fn set(&mut self, flag: StatusFlag, on: bool) {
        match flag {
            StatusFlag::Unanswered => self.unanswered = on,
            StatusFlag::Errors => self.errors = on,
        }
    }

    /// Flip a flag and return its new value.
    pub fn toggle(&mut self, flag: StatusFlag) -> bool {
        let on = !self.get(flag);
        self.set(flag, on);
        on
    }

    pub fn admits(&self, status: Status) -> bool {
        (self.unanswered && status == Status::Unanswered)
            || (self.errors && status == Status::Error)
    }
}

/// The active filter dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub cycle: Cycle,
    pub modality: Modality,
    pub modules: ModuleSelection,
    pub status: StatusFlags,
}

impl FilterState {
    /// Switch cycle. Module choices never carry across cycles.
    pub fn set_cycle(&mut self, cycle: Cycle) {
        self.cycle = cycle;
        self.modules.clear();
    }

    /// Whether `question` satisfies every active dimension.
    pub fn matches(&self, question: &Question) -> bool {
        question.cycle == self.cycle
            && question.modality == self.modality
            && self.modules.admits(&question.module)
            && self.status.admits(question.status)
    }
}

/// Questions of `catalog` matching `state`, in catalog order.
pub fn matching<'a>(
    catalog: &'a Catalog,
    state: &'a FilterState,
) -> impl Iterator<Item = &'a Question> + 'a {
    catalog.iter().filter(move |q| state.matches(q))
}

/// Full recount of matching questions. Linear in the catalog size.
pub fn count_matches(catalog: &Catalog, state: &FilterState) -> usize {
    matching(catalog, state).count()
}
