use anyhow::Result;
use testgen_proxy::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet, so failures here go to stderr.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match config::log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting test generation server with log filter: {}", log_level);
    info!("Configuration loaded: {:?}", config);

    server::run(config).await?;

    Ok(())
}
