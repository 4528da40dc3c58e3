//! CLI entry point for landmark distance measurement

use clap::Parser;
use palatometry::io::cli::{BatchProcessor, Cli};

fn main() -> palatometry::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()?;
    Ok(())
}
