//! Get command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use tagconf::render::render_value;
use tagconf::{TypeMismatch, Value};

use super::utils::SourceArgs;

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Fully-qualified key, e.g. 'http.port' (use '.name' for keys before any section)
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Fail unless the value has this type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub expect: Option<ExpectedType>,

    /// Print only the value, without the type tag
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpectedType {
    String,
    Boolean,
    Integer,
    Double,
    List,
}

pub fn run(args: GetArgs) -> Result<()> {
    let config = args.source.load()?;

    let Some(value) = config.get(&args.key) else {
        println!("{}", render_value(None));
        anyhow::bail!("Setting not found: {}", args.key);
    };

    if let Some(expected) = args.expect {
        expect_type(value, expected)?;
    }

    if args.raw {
        println!("{}", value);
    } else {
        println!("{}", render_value(Some(value)));
    }
    Ok(())
}

fn expect_type(value: &Value, expected: ExpectedType) -> Result<(), TypeMismatch> {
    match expected {
        ExpectedType::String => value.as_str().map(|_| ()),
        ExpectedType::Boolean => value.as_bool().map(|_| ()),
        ExpectedType::Integer => value.as_integer().map(|_| ()),
        ExpectedType::Double => value.as_double().map(|_| ()),
        ExpectedType::List => value.as_list().map(|_| ()),
    }
}
