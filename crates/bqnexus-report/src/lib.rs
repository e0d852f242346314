//! bqnexus-report — Rendering of engine state for terminals and tools.
//!
//! Everything here consumes only [`EngineView`] and [`Notebook`], so the
//! filter engine never knows how it is displayed.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use bqnexus_core::engine::EngineView;
use bqnexus_core::notebook::Notebook;

pub mod json;
pub mod markdown;
pub mod text;

/// Line shown when the active cycle has no modules.
pub const NO_MODULES: &str = "No modules available for this cycle.";

/// Output format for rendered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "markdown" | "md" => Ok(Format::Markdown),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Render the engine's observable outputs.
pub fn render_view(view: &EngineView, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(text::view(view)),
        Format::Json => json::view(view),
        Format::Markdown => Ok(markdown::view(view)),
    }
}

/// Render a generation confirmation.
pub fn render_notebook(notebook: &Notebook, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(text::notebook(notebook)),
        Format::Json => json::notebook(notebook),
        Format::Markdown => Ok(markdown::notebook(notebook)),
    }
}

/// One-line description of the active module restriction.
pub(crate) fn module_filter_label(view: &EngineView) -> String {
    if view.filter.modules.is_empty() {
        "all".to_string()
    } else {
        view.filter.modules.iter().collect::<Vec<_>>().join(", ")
    }
}

/// Included statuses, e.g. "unanswered + errors", or "none".
pub(crate) fn status_filter_label(view: &EngineView) -> String {
    let mut parts = Vec::new();
    if view.filter.status.unanswered {
        parts.push("unanswered");
    }
    if view.filter.status.errors {
        parts.push("errors");
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(" + ")
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use bqnexus_core::filter::StatusFlag;

    #[test]
    fn format_parse() {
        assert_eq!("md".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("text".parse::<Format>().unwrap(), Format::Text);
        assert!("html".parse::<Format>().is_err());
    }

    #[test]
    fn filter_labels() {
        let mut engine = fixtures::engine();
        assert_eq!(module_filter_label(&engine.view()), "all");
        assert_eq!(status_filter_label(&engine.view()), "unanswered");

        engine.toggle_module("Módulo 10");
        engine.toggle_status(StatusFlag::Errors);
        assert_eq!(module_filter_label(&engine.view()), "Módulo 10");
        assert_eq!(status_filter_label(&engine.view()), "unanswered + errors");

        engine.set_status(StatusFlag::Unanswered, false);
        engine.set_status(StatusFlag::Errors, false);
        assert_eq!(status_filter_label(&engine.view()), "none");
    }

    #[test]
    fn every_format_renders() {
        let engine = fixtures::engine();
        let view = engine.view();
        let notebook = engine.generate().unwrap();
        for format in [Format::Text, Format::Json, Format::Markdown] {
            assert!(!render_view(&view, format).unwrap().is_empty());
            assert!(!render_notebook(&notebook, format).unwrap().is_empty());
        }
    }
}
