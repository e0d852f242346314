//! The `bqnexus generate` command.

use anyhow::Result;

use bqnexus_report::{render_notebook, Format};

use super::{open_engine, FilterArgs, SourceArgs};

pub async fn execute(source: SourceArgs, filter: FilterArgs, format: Format) -> Result<()> {
    let engine = open_engine(&source, &filter).await?;

    let Some(notebook) = engine.generate() else {
        anyhow::bail!("no questions match the current filters, nothing to generate");
    };

    print!("{}", render_notebook(&notebook, format)?);
    Ok(())
}
