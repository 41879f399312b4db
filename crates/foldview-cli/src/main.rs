//! Entrypoint for CLI

use clap::Parser;
mod cli;
mod viewer;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    cli.execute()?;
    Ok(())
}
