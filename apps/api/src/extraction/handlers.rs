//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::ingest::pdf_to_text;
use crate::extraction::pipeline::ExtractionOutcome;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload of a PDF resume (field `file`). Returns the extracted
/// profile and which rung of the extraction ladder produced it.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionOutcome>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            upload = Some(data);
            break;
        }
    }

    let data = upload.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{UPLOAD_FIELD}' is required"))
    })?;
    let text = pdf_to_text(data).await?;

    Ok(Json(state.pipeline.extract(&text).await))
}

/// POST /api/v1/resumes/analyze-text
///
/// Same as `analyze`, for callers that already have the resume as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<ExtractionOutcome>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(state.pipeline.extract(&request.text).await))
}
