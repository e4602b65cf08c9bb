use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::ner_client::{EntityTagger, TaggedSpan};
use crate::resume::normalizer::{normalize_spans, ParsedResult};

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub parsed: ParsedResult,
    /// Tagger output, untouched.
    pub raw: Vec<TaggedSpan>,
}

/// Tags `text` and groups the spans by label.
///
/// Whitespace-only text is rejected before the tagger is called.
pub async fn parse_resume(
    text: &str,
    tagger: &dyn EntityTagger,
) -> Result<ParseResponse, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::InvalidInput("Empty text".to_string()));
    }

    let raw = tagger.tag(text).await?;
    let parsed = normalize_spans(&raw);

    tracing::info!(spans = raw.len(), fields = parsed.len(), "Parsed resume text");

    Ok(ParseResponse { parsed, raw })
}
