//! Axum route handlers for the resume parsing API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::resume::parser::{parse_resume, ParseRequest, ParseResponse};
use crate::state::AppState;

/// POST /parse
///
/// Tags the submitted text and returns the grouped fields alongside the raw spans.
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let response = parse_resume(&request.text, state.tagger.as_ref()).await?;
    Ok(Json(response))
}
