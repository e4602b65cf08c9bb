//! NER client — the single point of entry for entity tagging.
//!
//! No other module talks to the inference endpoint directly. Handlers depend on
//! the `EntityTagger` trait; `HfInferenceTagger` is the production backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod huggingface;

pub use huggingface::HfInferenceTagger;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TaggerError {
    /// Transport failures, rate limiting and server errors (including the 503
    /// sent while a model loads) are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            TaggerError::Http(_) => true,
            TaggerError::Api { status, .. } => *status == 429 || *status >= 500,
            TaggerError::Parse(_) => false,
        }
    }
}

/// One labeled span of the input text as reported by the model.
///
/// Field names on the wire follow the aggregated token-classification output
/// (`entity_group`, `word`, `score`), so `raw` in the parse response keeps the
/// model's spans in the model's own shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    #[serde(rename = "entity_group")]
    pub label: String,
    #[serde(rename = "word")]
    pub text: String,
    #[serde(rename = "score")]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl TaggedSpan {
    pub fn new(label: impl Into<String>, text: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            confidence,
            start: None,
            end: None,
        }
    }

    /// Confidence rounded to 3 decimal places. Display only.
    pub fn rounded_confidence(&self) -> f64 {
        (self.confidence * 1000.0).round() / 1000.0
    }
}

/// The entity tagger trait. Implement this to swap inference backends without
/// touching the handler or normalizer.
///
/// Carried in `AppState` as `Arc<dyn EntityTagger>`.
#[async_trait]
pub trait EntityTagger: Send + Sync {
    /// Identifier of the model behind this tagger, reported by `GET /`.
    fn model_id(&self) -> &str;

    async fn tag(&self, text: &str) -> Result<Vec<TaggedSpan>, TaggerError>;
}
