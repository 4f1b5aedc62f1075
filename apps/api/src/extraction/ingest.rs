//! Resume ingestion: turns uploaded PDF bytes into plain text for the pipeline.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts text from a PDF on the blocking pool. Empty or unparseable
/// documents are rejected before extraction runs.
pub async fn pdf_to_text(data: Bytes) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::UnreadableDocument("empty upload".to_string()));
    }

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::UnreadableDocument(format!("PDF extraction aborted: {e}"))
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::UnreadableDocument(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::UnreadableDocument(
            "no extractable text in document".to_string(),
        ));
    }

    debug!("Extracted {} chars of text from PDF", text.len());
    Ok(text)
}
