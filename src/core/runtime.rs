use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    core::homework::{check_response, parse_status},
    core::notifier::Notifier,
    error::CycleError,
    models::CycleOutcome,
    providers::practicum::StatusSource,
    providers::telegram::MessageSender,
};

pub struct Runtime<C, S> {
    config: Config,
    client: C,
    notifier: Notifier<S>,
    // Lower bound for `from_date`. Never advanced: every cycle asks for the whole history.
    timestamp: i64,
    last_status: String,
}

impl<C: StatusSource, S: MessageSender> Runtime<C, S> {
    pub fn new(config: Config, client: C, sender: S) -> Self {
        let notifier = Notifier::new(sender, &config.telegram_chat_id);
        Runtime {
            config,
            client,
            notifier,
            timestamp: 0,
            last_status: String::new(),
        }
    }

    /// One fetch, validate, notify pass. Does not sleep.
    pub async fn tick(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self.client.get_api_answer(self.timestamp).await?;
        let homeworks = check_response(&response)?;

        if let Some(current_date) = response.get("current_date").and_then(Value::as_i64) {
            debug!(current_date, cursor = self.timestamp, "Status API server time");
        }

        let Some(last_homework) = homeworks.first() else {
            debug!("No submissions yet");
            return Ok(CycleOutcome::NoSubmissions);
        };

        let status = last_homework.get("status").and_then(Value::as_str);
        if status == Some(self.last_status.as_str()) {
            debug!(status = %self.last_status, "Status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        // Only a status that translated cleanly is remembered.
        let message = parse_status(last_homework, &self.config.verdicts)?;
        self.last_status = status.unwrap_or_default().to_string();
        self.notifier.send_message(&message).await;
        Ok(CycleOutcome::Notified)
    }

    pub async fn run_periodically(&mut self) -> Result<(), anyhow::Error> {
        info!(
            endpoint = %self.config.endpoint,
            retry_period_secs = self.config.retry_period.as_secs(),
            "=== Starting homework bot ==="
        );

        loop {
            match self.tick().await {
                Ok(outcome) => debug!(?outcome, "Cycle finished"),
                Err(e) => error!(kind = e.kind(), "Сбой в работе программы: {}", e),
            }

            sleep(self.config.retry_period).await;
        }
    }

    #[cfg(test)]
    pub fn last_status(&self) -> &str {
        &self.last_status
    }
}
