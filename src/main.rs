use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use transcryb::cli::{self, Cli};

fn init_logging() {
    // stdout carries the transcript only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args = Cli::parse();
    cli::transcribe::run(args)
}
