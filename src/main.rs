mod config;
mod core;
mod error;
mod models;
mod providers;
mod verdicts;

use std::fs::File;
use std::sync::Mutex;

use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::runtime::Runtime;
use crate::error::ConfigError;
use crate::providers::practicum::PracticumClient;
use crate::providers::telegram::Telegram;

/// Opens the log file, dropping whatever the previous run wrote.
fn log_writer(path: &str) -> Result<Mutex<File>, ConfigError> {
    let file = File::create(path).map_err(|source| ConfigError::LogFile {
        path: path.to_string(),
        source,
    })?;
    Ok(Mutex::new(file))
}

fn init_logging(path: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(log_writer(path)?)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv_result = dotenv();
    init_logging(&config::log_file())?;
    if let Err(e) = dotenv_result {
        warn!("Error loading .env file: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "critical", "Environment check failed: {}", e);
            return Err(e.into());
        }
    };
    info!(
        chat_id = %config.telegram_chat_id,
        verdicts = config.verdicts.len(),
        "Configuration loaded"
    );

    let client = PracticumClient::new(
        &config.endpoint,
        &config.practicum_token,
        config.request_timeout,
    )?;
    let telegram = Telegram::new(&config.telegram_token);

    let mut runtime = Runtime::new(config, client, telegram);
    runtime.run_periodically().await?;

    Ok(())
}
