use anyhow::Result;
use clap::Parser;
use pycharm_workspace::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Progress notices go to stderr at info unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.command.execute()
}
