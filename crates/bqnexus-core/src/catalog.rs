//! The in-memory question catalog.
//!
//! Decodes `questoes.json`, enumerates modules per cycle, and validates the
//! bank for problems that would make filtering surprising.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::model::{module_ordinal, Cycle, Modality, Question, Status};

/// An immutable, cheaply clonable list of questions.
///
/// Records whose cycle or modality is not recognised stay out of
/// `questions` and can never match a filter, but they still count towards
/// `record_count` and show up in `validate_catalog`.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Arc<[Question]>,
    unrecognized: Arc<[CatalogWarning]>,
}

/// A record as it appears on the wire, before cycle and modality are parsed.
#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<String>,
    ciclo: String,
    modulo: String,
    modalidade: String,
    status: Status,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, String> {
        Ok(Question {
            cycle: self.ciclo.parse::<Cycle>()?,
            modality: self.modalidade.parse::<Modality>()?,
            id: self.id,
            module: self.modulo,
            status: self.status,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
            unrecognized: Arc::from(Vec::new()),
        }
    }

    /// Decode a JSON array of question records.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let records: Vec<RawQuestion> = serde_json::from_str(content)?;
        Ok(Self::from_records(records))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let records: Vec<RawQuestion> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<RawQuestion>) -> Self {
        let mut questions = Vec::with_capacity(records.len());
        let mut unrecognized = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            match record.into_question() {
                Ok(question) => questions.push(question),
                Err(message) => unrecognized.push(CatalogWarning {
                    index: Some(index),
                    message,
                }),
            }
        }

        if !unrecognized.is_empty() {
            tracing::warn!(
                "{} record(s) with an unrecognised cycle or modality will never match",
                unrecognized.len()
            );
        }

        Self {
            questions: questions.into(),
            unrecognized: unrecognized.into(),
        }
    }

    /// Number of filterable questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Every record in the source, including unrecognised ones.
    pub fn record_count(&self) -> usize {
        self.questions.len() + self.unrecognized.len()
    }

    /// Records set aside because their cycle or modality is unknown.
    pub fn unrecognized(&self) -> &[CatalogWarning] {
        &self.unrecognized
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Distinct module labels of `cycle`, ordered by their embedded ordinal.
    ///
    /// Labels with equal ordinals keep their first-seen order. An empty result
    /// means the cycle has no modules, which is a valid state.
    pub fn modules_for(&self, cycle: Cycle) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut modules: Vec<String> = self
            .questions
            .iter()
            .filter(|q| q.cycle == cycle)
            .filter(|q| seen.insert(q.module.as_str()))
            .map(|q| q.module.clone())
            .collect();

        modules.sort_by_key(|m| module_ordinal(m));
        modules
    }

    /// Number of questions per cycle. Every cycle is present, even at zero.
    pub fn cycle_counts(&self) -> BTreeMap<Cycle, usize> {
        let mut counts: BTreeMap<Cycle, usize> = Cycle::ALL.iter().map(|c| (*c, 0)).collect();
        for q in self.questions.iter() {
            *counts.entry(q.cycle).or_default() += 1;
        }
        counts
    }

    /// Number of questions per status.
    pub fn status_counts(&self) -> BTreeMap<Status, usize> {
        let mut counts = BTreeMap::new();
        for q in self.questions.iter() {
            *counts.entry(q.status).or_default() += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A non-fatal problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogWarning {
    /// Position of the offending record, if the warning is about one record.
    pub index: Option<usize>,
    pub message: String,
}

/// Check a catalog for data problems. Warnings never prevent loading.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogWarning> {
    let mut warnings = catalog.unrecognized().to_vec();
    let mut ids: HashMap<&str, usize> = HashMap::new();
    let mut module_cycles: BTreeMap<&str, HashSet<Cycle>> = BTreeMap::new();
    let mut unnumbered: HashSet<&str> = HashSet::new();

    for (index, q) in catalog.iter().enumerate() {
        if let Some(id) = q.id.as_deref() {
            if let Some(first) = ids.insert(id, index) {
                warnings.push(CatalogWarning {
                    index: Some(index),
                    message: format!("duplicate id '{id}' (first seen at #{first})"),
                });
            }
        }

        let label = q.module.trim();
        if label.is_empty() {
            warnings.push(CatalogWarning {
                index: Some(index),
                message: "blank module label".into(),
            });
            continue;
        }

        if !label.chars().any(|c| c.is_ascii_digit()) && unnumbered.insert(q.module.as_str()) {
            warnings.push(CatalogWarning {
                index: Some(index),
                message: format!("module '{}' has no ordinal and sorts first", q.module),
            });
        }

        module_cycles
            .entry(q.module.as_str())
            .or_default()
            .insert(q.cycle);
    }

    for (module, cycles) in &module_cycles {
        if cycles.len() > 1 {
            let mut sorted: Vec<Cycle> = cycles.iter().copied().collect();
            sorted.sort();
            let names: Vec<&str> = sorted.iter().map(Cycle::as_str).collect();
            warnings.push(CatalogWarning {
                index: None,
                message: format!(
                    "module '{module}' appears in several cycles: {}",
                    names.join(", ")
                ),
            });
        }
    }

    for (cycle, count) in catalog.cycle_counts() {
        if count == 0 {
            warnings.push(CatalogWarning {
                index: None,
                message: format!("cycle '{cycle}' has no questions"),
            });
        }
    }

    warnings
}
