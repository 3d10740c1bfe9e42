use std::sync::Arc;

use crate::config::Config;
use crate::grammar_client::GrammarChecker;
use crate::interview::questions::QuestionBank;
use crate::resume::scorer::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable résumé scorer. Default: KeywordResumeScorer. Swap via ENABLE_LLM_RESUME_SCORING.
    pub resume_scorer: Arc<dyn ResumeScorer>,
    pub grammar: Arc<dyn GrammarChecker>,
    pub questions: QuestionBank,
}
