//! The `bqnexus validate` command.

use anyhow::Result;

use bqnexus_core::catalog::validate_catalog;

use super::{open_engine, FilterArgs, SourceArgs};

pub async fn execute(source: SourceArgs) -> Result<()> {
    let engine = open_engine(&source, &FilterArgs::default()).await?;
    let catalog = engine.catalog();

    println!("Question bank: {} questions", catalog.record_count());
    for (cycle, count) in catalog.cycle_counts() {
        println!("  {cycle}: {count}");
    }
    for (status, count) in catalog.status_counts() {
        println!("  [{status}] {count}");
    }

    let warnings = validate_catalog(catalog);
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [#{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
