// src/main.rs

use anyhow::Result;
use clap::Parser;

use iconmap::{cli::Cli, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()
}
