//! Markdown rendering, for pasting into notes.

use bqnexus_core::engine::{EngineView, Readiness};
use bqnexus_core::notebook::Notebook;

use crate::{module_filter_label, status_filter_label, NO_MODULES};

pub fn view(view: &EngineView) -> String {
    if view.readiness == Readiness::NotReady {
        return "_Question bank not loaded._\n".to_string();
    }

    let mut md = String::from("## Question bank\n\n");
    md.push_str("| Filter | Value |\n|--------|-------|\n");
    md.push_str(&format!("| Cycle | {} |\n", view.filter.cycle));
    md.push_str(&format!("| Modality | {} |\n", view.filter.modality));
    md.push_str(&format!(
        "| Modules | {} |\n",
        escape_pipes(&module_filter_label(view))
    ));
    md.push_str(&format!("| Status | {} |\n", status_filter_label(view)));
    md.push_str(&format!("| Quantity | {} |\n\n", view.quantity));

    md.push_str(&format!(
        "**{}** of {} questions match.\n\n",
        view.filtered_count, view.total_questions
    ));

    md.push_str("### Modules\n\n");
    if view.modules.is_empty() {
        md.push_str(&format!("_{NO_MODULES}_\n"));
    } else {
        for module in &view.modules {
            let mark = if view.filter.modules.contains(module) {
                "x"
            } else {
                " "
            };
            md.push_str(&format!("- [{mark}] {}\n", escape_pipes(module)));
        }
    }
    md
}

/// Module labels are free text; a bare `|` would split a table cell.
fn escape_pipes(s: &str) -> String {
    s.replace('|', "\\|")
}

pub fn notebook(notebook: &Notebook) -> String {
    format!(
        "### Notebook `{}`\n\n{}\n\n- Requested: {}\n- Available: {}\n- Generated: {}\n",
        notebook.id,
        notebook.message(),
        notebook.requested,
        notebook.available,
        notebook.generated_at.to_rfc3339()
    )
}
