mod color;
mod config;
mod error;
mod filter;
mod grid;
mod logger;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::Config;

/// Recolors the leaf texture with the biome tint
#[derive(Parser)]
struct Args {
    /// Log every pipeline stage
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = Config::new()?;
    config.run().with_context(|| {
        format!(
            "tinting {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    info!("Done");
    Ok(())
}
