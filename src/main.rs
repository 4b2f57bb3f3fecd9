use anyhow::Result;
use clap::Parser;
use ghstreak::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
