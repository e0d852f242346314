//! The `bqnexus summary` command.

use anyhow::Result;

use bqnexus_report::{render_view, Format};

use super::{open_engine, FilterArgs, SourceArgs};

pub async fn execute(source: SourceArgs, filter: FilterArgs, format: Format) -> Result<()> {
    let engine = open_engine(&source, &filter).await?;
    print!("{}", render_view(&engine.view(), format)?);
    Ok(())
}
