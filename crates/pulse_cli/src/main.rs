//! Pulse CLI
//!
//! Headless tooling for the Pulse bootstrap layer.

mod cli;
mod simulate;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    cli::run(cli::Cli::parse())
}
