use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook url is not configured")]
    NotConfigured,
    #[error("could not build http client: {0}")]
    Client(String),
    #[error("webhook request failed: {0}")]
    Network(String),
    #[error("webhook returned http status {0}")]
    HttpStatus(u16),
}

/// Delivers a text message to an external endpoint.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// POSTs `{"content": message}` to a webhook endpoint. Delivery failures
/// surface as explicit errors; nothing here retries.
pub struct WebhookNotifier {
    webhook_url: Option<String>,
    request_timeout: Duration,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            webhook_url,
            request_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(NotifyError::NotConfigured)?;

        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|err| NotifyError::Client(err.to_string()))?;

        let payload = serde_json::json!({ "content": message });
        let response = client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| NotifyError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}
