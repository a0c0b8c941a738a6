use std::env;
use std::time::Duration;

use crate::error::ConfigError;
use crate::verdicts::VerdictTable;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILE: &str = "main.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub verdicts: VerdictTable,
}

impl Config {
    /// Reads the process environment. Call after `.env` has been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let retry_period = match optional("RETRY_PERIOD") {
            Some(raw) => parse_secs("RETRY_PERIOD", raw)?,
            None => DEFAULT_RETRY_PERIOD_SECS,
        };
        let request_timeout = match optional("REQUEST_TIMEOUT") {
            Some(raw) => parse_secs("REQUEST_TIMEOUT", raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let config = Config {
            practicum_token: value("PRACTICUM_TOKEN"),
            telegram_token: value("TELEGRAM_TOKEN"),
            telegram_chat_id: value("TELEGRAM_CHAT_ID"),
            endpoint: optional("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_period: Duration::from_secs(retry_period),
            request_timeout: Duration::from_secs(request_timeout),
            verdicts: VerdictTable::default(),
        };
        config.check_tokens()?;
        Ok(config)
    }

    /// Every value the bot cannot run without must be present and non-empty.
    pub fn check_tokens(&self) -> Result<(), ConfigError> {
        let required = [
            ("PRACTICUM_TOKEN", self.practicum_token.is_empty()),
            ("TELEGRAM_TOKEN", self.telegram_token.is_empty()),
            ("TELEGRAM_CHAT_ID", self.telegram_chat_id.is_empty()),
            ("PRACTICUM_ENDPOINT", self.endpoint.is_empty()),
            ("RETRY_PERIOD", self.retry_period.is_zero()),
            ("HOMEWORK_VERDICTS", self.verdicts.is_empty()),
        ];
        match required.iter().find(|(_, missing)| *missing) {
            Some((name, _)) => Err(ConfigError::Missing(*name)),
            None => Ok(()),
        }
    }
}

/// Log destination. Read on its own so that configuration errors can still be logged.
pub fn log_file() -> String {
    env::var("LOG_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

fn parse_secs(name: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .map_err(|_| ConfigError::Invalid { name, value: raw })
}
