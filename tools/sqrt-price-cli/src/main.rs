use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sqrt_price_cli::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging on stderr so stdout carries only the value
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(&args)?);
    Ok(())
}
