mod cli;
mod playground;

use clap::Parser;
use stargrade_engine::logging::{init_logging, LoggingConfig};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::default().verbose(cli.verbose));

    cli.playground().run()?;
    Ok(())
}
