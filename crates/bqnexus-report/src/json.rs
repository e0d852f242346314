//! JSON rendering for scripts.

use anyhow::Result;

use bqnexus_core::engine::EngineView;
use bqnexus_core::notebook::Notebook;

pub fn view(view: &EngineView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

pub fn notebook(notebook: &Notebook) -> Result<String> {
    let mut value = serde_json::to_value(notebook)?;
    value["message"] = serde_json::Value::String(notebook.message());
    Ok(serde_json::to_string_pretty(&value)?)
}
