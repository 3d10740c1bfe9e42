use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::grammar_client::{check_grammar, GrammarReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GrammarCheckRequest {
    #[serde(default)]
    pub text: String,
}

/// POST /api/grammar_check
pub async fn handle_grammar_check(
    State(state): State<AppState>,
    Json(request): Json<GrammarCheckRequest>,
) -> Result<Json<GrammarReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let report = check_grammar(
        state.grammar.as_ref(),
        &request.text,
        state.config.upstream_policy,
    )
    .await?;
    info!(
        grammar_score = report.grammar_score,
        degraded = report.degraded,
        "grammar checked"
    );
    Ok(Json(report))
}
