//! CLI entry point for the island grid extraction tool

use clap::Parser;
use islegrid::io::cli::{Cli, Command, Extractor};

fn main() -> islegrid::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => Extractor::new(args).run(),
    }
}
