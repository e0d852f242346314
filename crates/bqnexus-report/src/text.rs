//! Plain-text rendering for terminals.

use comfy_table::{Cell, Table};

use bqnexus_core::engine::{EngineView, Readiness};
use bqnexus_core::notebook::Notebook;

use crate::{module_filter_label, status_filter_label, NO_MODULES};

/// Render the engine view as a summary table followed by the module list.
pub fn view(view: &EngineView) -> String {
    if view.readiness == Readiness::NotReady {
        return "Question bank not loaded.\n".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Filter", "Value"]);
    table.add_row(vec![Cell::new("Cycle"), Cell::new(view.filter.cycle)]);
    table.add_row(vec![Cell::new("Modality"), Cell::new(view.filter.modality)]);
    table.add_row(vec![Cell::new("Modules"), Cell::new(module_filter_label(view))]);
    table.add_row(vec![Cell::new("Status"), Cell::new(status_filter_label(view))]);
    table.add_row(vec![Cell::new("Quantity"), Cell::new(view.quantity)]);

    let mut out = format!("{table}\n");
    out.push_str(&format!("Total questions: {}\n", view.total_questions));
    out.push_str(&format!("Questions found: {}\n", view.filtered_count));
    out.push_str(&format!(
        "Generate: {}\n",
        if view.can_generate { "enabled" } else { "disabled" }
    ));
    out.push('\n');
    out.push_str(&modules(&view.modules));
    out
}

/// Numbered module list, or the empty-state line.
pub fn modules(modules: &[String]) -> String {
    if modules.is_empty() {
        return format!("{NO_MODULES}\n");
    }

    let mut out = String::from("Modules:\n");
    for (i, module) in modules.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {module}\n", i + 1));
    }
    out
}

pub fn notebook(notebook: &Notebook) -> String {
    let mut out = format!("{}\n", notebook.message());
    if notebook.is_short() {
        out.push_str(&format!(
            "Only {} matching question(s) for {} requested.\n",
            notebook.available, notebook.requested
        ));
    }
    out.push_str(&format!(
        "Id: {} | {}\n",
        notebook.id,
        notebook.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use bqnexus_core::FilterEngine;

    #[test]
    fn view_lists_counts_and_modules() {
        let out = view(&fixtures::engine().view());
        assert!(out.contains("Ciclo Básico"));
        assert!(out.contains("Total questions: 3"));
        assert!(out.contains("Questions found: 2"));
        assert!(out.contains("Generate: enabled"));
        let two = out.find("Módulo 2").unwrap();
        let ten = out.find("Módulo 10").unwrap();
        assert!(two < ten);
    }

    #[test]
    fn not_ready_view() {
        let out = view(&FilterEngine::new().view());
        assert!(out.contains("not loaded"));
    }

    #[test]
    fn empty_modules_line() {
        assert_eq!(modules(&[]), format!("{NO_MODULES}\n"));
    }

    #[test]
    fn short_notebook_mentions_shortfall() {
        let notebook = fixtures::engine().generate().unwrap();
        let out = super::notebook(&notebook);
        assert!(out.contains("2 question(s)"));
        assert!(out.contains("Only 2 matching question(s) for 20 requested"));
    }
}
