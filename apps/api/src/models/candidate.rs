use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Achievement awarded when a stage score crosses its threshold.
/// Ordered so a badge set serializes the same way every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Badge {
    #[serde(rename = "ATS Master")]
    AtsMaster,
    #[serde(rename = "Grammar Guru")]
    GrammarGuru,
    #[serde(rename = "Interview Ace")]
    InterviewAce,
    #[serde(rename = "Speed Demon")]
    SpeedDemon,
}

/// A judged answer as far as aggregation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub score: u32,
    #[serde(default)]
    pub elapsed_seconds: Option<u32>,
}

/// Running tally for one candidate. Updated only through
/// `candidate::aggregator::{record_stage, rescore_stage}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    pub ats_score: u32,
    pub grammar_score: u32,
    pub answer_score: u32,
    pub total_score: u32,
    pub badges: BTreeSet<Badge>,
    pub time_bonus: bool,
    pub answers: Vec<AnswerOutcome>,
    pub created_at: DateTime<Utc>,
}

impl CandidateRecord {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ats_score: 0,
            grammar_score: 0,
            answer_score: 0,
            total_score: 0,
            badges: BTreeSet::new(),
            time_bonus: false,
            answers: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
