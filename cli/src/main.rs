//! bedrock-sweep - remove leftover Bedrock course resources from an AWS account

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bedrock_sweep::cli::Cli;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "BEDROCK_SWEEP_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("bedrock_sweep=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
