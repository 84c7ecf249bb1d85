//! CLI entry point for computing and comparing image fingerprints

use clap::Parser;
use imgsmlr::io::cli::{Cli, Runner};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> imgsmlr::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let runner = Runner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
