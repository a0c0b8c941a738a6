use reqwest::StatusCode;

/// Startup failure. Any of these stops the process before polling begins.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required configuration value {0} is missing or empty")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure inside one polling cycle. The driver logs it and tries again next cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("request to the status API could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("status API returned {0} instead of 200 OK")]
    HttpStatus(StatusCode),
    #[error("status API body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected API response: {0}")]
    Schema(String),
    #[error("cannot read submission: {0}")]
    Field(String),
}

impl CycleError {
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::Transport(_) => "transport",
            CycleError::HttpStatus(_) => "http_status",
            CycleError::Decode(_) => "decode",
            CycleError::Schema(_) => "schema",
            CycleError::Field(_) => "field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_kinds_and_messages() {
        let err = CycleError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.kind(), "http_status");
        assert_eq!(
            err.to_string(),
            "status API returned 503 Service Unavailable instead of 200 OK"
        );

        let err = CycleError::Field("status \"pending\" has no verdict".to_string());
        assert_eq!(err.kind(), "field");

        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(CycleError::from(decode).kind(), "decode");
    }

    #[test]
    fn missing_config_names_the_variable() {
        let err = ConfigError::Missing("TELEGRAM_TOKEN");
        assert_eq!(
            err.to_string(),
            "required configuration value TELEGRAM_TOKEN is missing or empty"
        );
    }
}
