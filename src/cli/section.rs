//! Section command implementation

use anyhow::Result;
use clap::Args;
use tagconf::render::render_section;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct SectionArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Section name (use '' for settings before any section header)
    #[arg(value_name = "NAME")]
    pub name: String,
}

pub fn run(args: SectionArgs) -> Result<()> {
    let config = args.source.load()?;

    let Some(section) = config.section(&args.name) else {
        println!("Section not found.");
        anyhow::bail!("Section not found: {}", args.name);
    };

    print!("{}", render_section(section));
    Ok(())
}
