//! Cardano Explorer CLI
//!
//! Query the Blockfrost API from the command line

use cardano_explorer::cli::{Cli, Runner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // --verbose forces DEBUG, otherwise RUST_LOG refines an INFO default
    let filter = if cli.verbose {
        EnvFilter::default().add_directive(cli.log_level().into())
    } else {
        EnvFilter::builder()
            .with_default_directive(cli.log_level().into())
            .from_env_lossy()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
