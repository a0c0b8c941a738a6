use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::error::CycleError;

/// Anything that can answer "what are the homework statuses since `from_date`".
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, CycleError>;
}

pub struct PracticumClient {
    endpoint: String,
    client: reqwest::Client,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("OAuth {}", token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(PracticumClient {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, CycleError> {
        debug!(endpoint = %self.endpoint, from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Status API responded");
        if status != StatusCode::OK {
            return Err(CycleError::HttpStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str::<Value>(&body)?)
    }
}
