//! Prosegrade - audience-calibrated readability analysis CLI
//!
//! Grades technical prose against a target audience tier and suggests
//! revisions, ordered by how much they matter.

use anyhow::Result;
use clap::Parser;
use prosegrade::cli::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
