//! teleblog-style - validate and render the teleblog style config.

use anyhow::Result;
use clap::Parser;
use teleblog_style::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
