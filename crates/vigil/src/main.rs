//! Vigil CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vigil::cli::Cli;

/// Main entry point for the vigil CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// This is appropriate for CLI applications with sequential I/O-bound operations.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=vigil=debug,vigil_csv=trace cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vigil=info,vigil_csv=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting vigil CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Vigil CLI completed successfully");
    Ok(())
}
