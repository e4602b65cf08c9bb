use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{EntityTagger, TaggedSpan, TaggerError};
use crate::config::Config;

const MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_millis(1000);

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    aggregation_strategy: &'a str,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: serde_json::Value,
}

/// Token-classification client for the Hugging Face inference API.
/// Word pieces are merged server-side with the "simple" aggregation strategy.
#[derive(Clone)]
pub struct HfInferenceTagger {
    client: Client,
    endpoint: String,
    model: String,
    token: Option<String>,
    backoff: Duration,
}

impl HfInferenceTagger {
    pub fn new(config: &Config) -> Result<Self, TaggerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.ner_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.ner_endpoint(),
            model: config.ner_model.clone(),
            token: config.hf_token.clone(),
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Overrides the base delay between retries. Attempt `n` waits `base * 2^(n-1)`.
    pub fn with_backoff(mut self, base: Duration) -> Self {
        self.backoff = base;
        self
    }

    /// One request/response round trip, without retries.
    async fn call_once(&self, body: &InferenceRequest<'_>) -> Result<Vec<TaggedSpan>, TaggerError> {
        let mut request = self.client.post(&self.endpoint).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaggerError::Api {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl EntityTagger for HfInferenceTagger {
    fn model_id(&self) -> &str {
        &self.model
    }

    /// Retries on 429, 5xx (including the 503 returned while a model loads)
    /// and transport errors with exponential backoff.
    async fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>, TaggerError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                aggregation_strategy: "simple",
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut attempt = 0;

        loop {
            attempt += 1;

            let err = match self.call_once(&body).await {
                Ok(spans) => {
                    debug!(model = %self.model, spans = spans.len(), "NER call succeeded");
                    return Ok(spans);
                }
                Err(e) => e,
            };

            if attempt >= MAX_ATTEMPTS || !err.is_retryable() {
                return Err(err);
            }

            let delay = self.backoff * (1 << (attempt - 1));
            warn!(
                "NER call attempt {} failed ({}), retrying after {}ms...",
                attempt,
                err,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}

/// Pulls the `error` field out of an inference API error body, falling back
/// to the raw body.
fn error_message(body: String) -> String {
    match serde_json::from_str::<InferenceError>(&body).map(|e| e.error) {
        Ok(serde_json::Value::String(message)) => message,
        Ok(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from).unwrap_or_else(|| item.to_string()))
            .collect::<Vec<_>>()
            .join("; "),
        Ok(other) => other.to_string(),
        Err(_) => body,
    }
}
