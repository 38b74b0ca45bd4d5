//! CLI entry point for the ASCII maze generator

use asciimaze::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> asciimaze::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
