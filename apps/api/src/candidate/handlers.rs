//! Axum route handler for the end-of-game scoreboard.

use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::candidate::aggregator::{record_stage, StageUpdate};
use crate::errors::AppError;
use crate::models::candidate::{AnswerOutcome, CandidateRecord};

#[derive(Debug, Deserialize)]
pub struct ScoreCandidateRequest {
    #[serde(default)]
    pub candidate_id: Option<Uuid>,
    #[serde(default)]
    pub ats_score: Option<u32>,
    #[serde(default)]
    pub grammar_score: Option<u32>,
    #[serde(default)]
    pub answers: Vec<AnswerOutcome>,
}

impl ScoreCandidateRequest {
    fn validate(&self) -> Result<(), AppError> {
        let stage_scores = [("ats_score", self.ats_score), ("grammar_score", self.grammar_score)];
        for (field, score) in stage_scores {
            if let Some(score) = score.filter(|s| *s > 100) {
                return Err(AppError::Validation(format!(
                    "{field} must be between 0 and 100, got {score}"
                )));
            }
        }
        if let Some(answer) = self.answers.iter().find(|a| a.score > 100) {
            return Err(AppError::Validation(format!(
                "answer score must be between 0 and 100, got {}",
                answer.score
            )));
        }
        Ok(())
    }
}

/// POST /api/candidates/score
///
/// Stateless: builds a fresh record from the submitted stage results. Stages
/// left out count as zero.
pub async fn handle_score_candidate(
    Json(request): Json<ScoreCandidateRequest>,
) -> Result<Json<CandidateRecord>, AppError> {
    request.validate()?;

    let mut record = CandidateRecord::new(request.candidate_id.unwrap_or_else(Uuid::new_v4));
    if let Some(score) = request.ats_score {
        record_stage(&mut record, StageUpdate::Resume(score));
    }
    if let Some(score) = request.grammar_score {
        record_stage(&mut record, StageUpdate::Grammar(score));
    }
    record_stage(&mut record, StageUpdate::Answers(request.answers));

    info!(
        candidate_id = %record.id,
        total_score = record.total_score,
        badges = record.badges.len(),
        "candidate scored"
    );
    Ok(Json(record))
}
