use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::interview::judge::Stage;

/// One free-text answer as submitted by a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSubmission {
    /// Required for stages judged against a per-question vocabulary.
    #[serde(default, alias = "id")]
    pub question_id: Option<u32>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub elapsed_seconds: Option<u32>,
}

/// Points contributed by each rule. The length gate bypasses all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentBreakdown {
    pub length_bonus: u32,
    pub keyword_points: u32,
    pub phrase_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerJudgment {
    pub stage: Stage,
    pub score: u32, // 0 – 100
    pub feedback: String,
    pub xp: u32,
    pub matched_keywords: BTreeSet<String>,
    pub breakdown: JudgmentBreakdown,
    pub too_short: bool,
    pub elapsed_seconds: Option<u32>,
}
