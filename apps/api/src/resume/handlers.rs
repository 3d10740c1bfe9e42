//! Axum route handlers for the résumé scan (level 1).

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeAssessment;
use crate::resume::extract::extract_text_blocking;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ScanTextRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/scan_resume
///
/// Multipart upload with a `resume` file field. Unreadable files are scored
/// as empty text rather than rejected.
pub async fn handle_scan_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAssessment>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        upload = Some((file_name, content_type, bytes));
        break;
    }

    let (file_name, content_type, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if file_name.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let text = extract_text_blocking(bytes, content_type).await;
    score_text(&state, &text).await
}

/// POST /api/scan_resume/text
///
/// Scores already-extracted text.
pub async fn handle_scan_resume_text(
    State(state): State<AppState>,
    Json(request): Json<ScanTextRequest>,
) -> Result<Json<ResumeAssessment>, AppError> {
    score_text(&state, &request.resume_text).await
}

async fn score_text(state: &AppState, text: &str) -> Result<Json<ResumeAssessment>, AppError> {
    let assessment = state.resume_scorer.score(text).await?;
    info!(
        score = assessment.score,
        char_class = %assessment.char_class,
        backend = %assessment.scorer_backend,
        "résumé scanned"
    );
    Ok(Json(assessment))
}
