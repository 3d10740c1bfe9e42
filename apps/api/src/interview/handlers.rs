//! Axum route handlers for the interview levels.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::judge::{judge_submission, Stage};
use crate::interview::questions::Question;
use crate::models::interview::{AnswerJudgment, AnswerSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: u32,
    pub scenario: &'static str,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            scenario: question.scenario,
        }
    }
}

/// GET /api/get_level2_question
///
/// Uniform random scenario; repeats across requests are expected.
pub async fn handle_get_level2_question(
    State(state): State<AppState>,
) -> Result<Json<QuestionResponse>, AppError> {
    let question = {
        let mut rng = rand::thread_rng();
        state.questions.pick(&mut rng)
    };
    let question =
        question.ok_or_else(|| AppError::NotFound("No questions available".to_string()))?;
    Ok(Json(QuestionResponse::from(question)))
}

/// POST /api/judge_level2
pub async fn handle_judge_level2(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<AnswerJudgment>, AppError> {
    judge(&state, Stage::Situational, submission)
}

/// POST /api/judge_level3
pub async fn handle_judge_level3(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<AnswerJudgment>, AppError> {
    judge(&state, Stage::StarMethod, submission)
}

/// POST /api/judge_level4
pub async fn handle_judge_level4(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<AnswerJudgment>, AppError> {
    judge(&state, Stage::Strategy, submission)
}

/// POST /api/judge_level5
pub async fn handle_judge_level5(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<AnswerJudgment>, AppError> {
    judge(&state, Stage::GrowthMindset, submission)
}

fn judge(
    state: &AppState,
    stage: Stage,
    submission: AnswerSubmission,
) -> Result<Json<AnswerJudgment>, AppError> {
    let judgment = judge_submission(stage, &submission, &state.questions)?;
    info!(
        stage = ?stage,
        score = judgment.score,
        too_short = judgment.too_short,
        "answer judged"
    );
    Ok(Json(judgment))
}
