//! Notebook generation.
//!
//! Generation is count-and-acknowledge: it settles how many questions the
//! notebook will hold and describes it. No questions are picked here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Cycle, Modality};
use crate::quantity::Quantity;

/// Confirmation of a generated notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub id: Uuid,
    /// `min(requested, available)`.
    pub final_quantity: u32,
    pub requested: u32,
    /// Filtered count at generation time.
    pub available: usize,
    pub cycle: Cycle,
    pub modality: Modality,
    pub generated_at: DateTime<Utc>,
}

impl Notebook {
    pub fn generate(
        requested: Quantity,
        available: usize,
        cycle: Cycle,
        modality: Modality,
    ) -> Self {
        let final_quantity = u32::try_from(available)
            .unwrap_or(u32::MAX)
            .min(requested.get());

        Self {
            id: Uuid::new_v4(),
            final_quantity,
            requested: requested.get(),
            available,
            cycle,
            modality,
            generated_at: Utc::now(),
        }
    }

    /// Human-readable confirmation.
    pub fn message(&self) -> String {
        format!(
            "Notebook generated: {} question(s) from {} ({}).",
            self.final_quantity, self.cycle, self.modality
        )
    }

    /// Whether fewer questions were available than requested.
    pub fn is_short(&self) -> bool {
        self.final_quantity < self.requested
    }
}
