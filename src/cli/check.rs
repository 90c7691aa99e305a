//! Check command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let config = args.source.load()?;
    let store = config.store();
    println!("OK: {} settings in {} sections", store.len(), store.section_count());
    Ok(())
}
