//! The `bqnexus modules` command.

use anyhow::Result;

use super::{open_engine, FilterArgs, SourceArgs};

pub async fn execute(source: SourceArgs, filter: FilterArgs) -> Result<()> {
    let engine = open_engine(&source, &filter).await?;
    println!("{}", engine.filter().cycle);
    print!("{}", bqnexus_report::text::modules(&engine.modules()));
    Ok(())
}
