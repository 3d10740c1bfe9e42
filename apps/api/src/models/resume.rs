use serde::Serialize;

use crate::resume::categories::Scorecard;

/// Result of one résumé scan. Built once per request and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAssessment {
    /// The extracted text the assessment was computed from. Not echoed back.
    #[serde(skip)]
    pub source_text: String,
    pub score: u32, // 0 – 100
    pub char_class: String,
    pub xp: u32, // score × 10
    /// Gaps to fix, in scoring order. Empty when the LLM backend produced the score.
    pub feedback: Vec<String>,
    /// What the résumé does well. Only the LLM backend reports these.
    pub strengths: Vec<String>,
    pub short_feedback: String,
    /// Per-category breakdown. Absent when the LLM backend produced the score.
    pub scorecard: Option<Scorecard>,
    pub scorer_backend: String, // "keyword" | "llm"
}

pub const XP_PER_POINT: u32 = 10;

impl ResumeAssessment {
    pub fn new(
        source_text: String,
        score: u32,
        char_class: String,
        feedback: Vec<String>,
        short_feedback: String,
        scorecard: Option<Scorecard>,
        scorer_backend: &str,
    ) -> Self {
        debug_assert!(score <= 100, "résumé score {score} out of range");
        let score = score.min(100);

        Self {
            source_text,
            score,
            char_class,
            xp: score * XP_PER_POINT,
            feedback,
            strengths: Vec::new(),
            short_feedback,
            scorecard,
            scorer_backend: scorer_backend.to_string(),
        }
    }

    pub fn with_strengths(mut self, strengths: Vec<String>) -> Self {
        self.strengths = strengths;
        self
    }
}
