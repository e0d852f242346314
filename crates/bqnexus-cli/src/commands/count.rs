//! The `bqnexus count` command.

use anyhow::Result;

use super::{open_engine, FilterArgs, SourceArgs};

pub async fn execute(source: SourceArgs, filter: FilterArgs) -> Result<()> {
    let engine = open_engine(&source, &filter).await?;
    println!("{}", engine.filtered_count());
    Ok(())
}
