mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the upstream bearer token.
pub const API_TOKEN_ENV: &str = "HF_API_KEY";

pub async fn load() -> Result<Config> {
    check_env_file(dotenvy::dotenv())?;

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_file(&config_path).await?;

    if let Ok(token) = env::var(API_TOKEN_ENV) {
        config.inference.api_token = token;
    }

    Ok(config)
}

/// Loads `KEY=value` pairs from an env file into the process environment.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<()> {
    check_env_file(dotenvy::from_path(path.as_ref()))
}

// A missing env file is fine; a present but unreadable one is not.
fn check_env_file<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => {
            debug!("Loaded environment file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::config(format!("Failed to load .env file: {}", e))),
    }
}

/// Builds the log filter from a level or `RUST_LOG`-style directives.
pub fn log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        Error::config(format!(
            "Invalid log level: '{}' ({}). Use error, warn, info, debug, trace or target=level directives",
            directives, e
        ))
    })
}

/// Reads a YAML config file, falling back to defaults when it does not exist.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
