//! Tic-tac-toe on the console.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Driver, DriverConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DriverConfig::resolve(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = Driver::new(stdin.lock(), stdout.lock(), &config).run()?;

    if let Some(summary) = summary
        && *config.json_summary()
    {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
