//! Résumé scorer backends: pluggable behind the [`ResumeScorer`] trait.
//!
//! Default: `KeywordResumeScorer` (pure, deterministic, fully testable).
//! Optional: `LlmResumeScorer`, which asks the LLM judge for a strict JSON
//! verdict and applies the upstream failure policy when the judge is
//! unreachable or answers with something that does not validate.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`, chosen at startup via config.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::ResumeAssessment;
use crate::resume::assess_resume;
use crate::resume::categories::CategoryConfig;
use crate::resume::prompts::{build_resume_prompt, resume_judge_system};
use crate::upstream::UpstreamPolicy;

#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<ResumeAssessment, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordResumeScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResumeScorer {
    config: CategoryConfig,
}

impl KeywordResumeScorer {
    pub fn new(config: CategoryConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, text: &str) -> ResumeAssessment {
        assess_resume(text, &self.config)
    }
}

#[async_trait]
impl ResumeScorer for KeywordResumeScorer {
    async fn score(&self, text: &str) -> Result<ResumeAssessment, AppError> {
        Ok(self.assess(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmResumeScorer
// ────────────────────────────────────────────────────────────────────────────

const MAX_STRENGTHS: usize = 2;

/// Verdict schema the judge must return.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmVerdict {
    pub ats_score: u32,
    pub class_archetype: String,
    pub xp_gained: u32,
    pub strengths: Vec<String>,
    pub boss_feedback: String,
}

impl LlmVerdict {
    /// Turns a parsed verdict into an assessment, rejecting anything outside
    /// the schema's ranges instead of clamping it.
    pub fn into_assessment(self, text: &str) -> Result<ResumeAssessment, LlmError> {
        if self.ats_score > 100 {
            return Err(LlmError::Schema(format!(
                "ats_score {} outside 0..=100",
                self.ats_score
            )));
        }
        if self.class_archetype.trim().is_empty() {
            return Err(LlmError::Schema("class_archetype is empty".to_string()));
        }
        if self.strengths.len() > MAX_STRENGTHS {
            return Err(LlmError::Schema(format!(
                "{} strengths returned, at most {MAX_STRENGTHS} allowed",
                self.strengths.len()
            )));
        }
        if self.boss_feedback.trim().is_empty() {
            return Err(LlmError::Schema("boss_feedback is empty".to_string()));
        }

        let assessment = ResumeAssessment::new(
            text.to_string(),
            self.ats_score,
            self.class_archetype.trim().to_string(),
            Vec::new(),
            self.boss_feedback,
            None,
            "llm",
        )
        .with_strengths(self.strengths);
        if assessment.xp != self.xp_gained {
            debug!(
                "LLM xp_gained {} disagrees with score-derived xp {}; using the latter",
                self.xp_gained, assessment.xp
            );
        }
        Ok(assessment)
    }
}

pub struct LlmResumeScorer {
    llm: LlmClient,
    char_budget: usize,
    policy: UpstreamPolicy,
    fallback: KeywordResumeScorer,
}

impl LlmResumeScorer {
    pub fn new(llm: LlmClient, char_budget: usize, policy: UpstreamPolicy) -> Self {
        Self {
            llm,
            char_budget,
            policy,
            fallback: KeywordResumeScorer::default(),
        }
    }

    /// Applies the upstream policy to the judge's outcome.
    fn settle(
        &self,
        text: &str,
        outcome: Result<ResumeAssessment, LlmError>,
    ) -> Result<ResumeAssessment, AppError> {
        self.policy
            .resolve("llm", outcome, || self.fallback.assess(text), AppError::Llm)
    }
}

#[async_trait]
impl ResumeScorer for LlmResumeScorer {
    async fn score(&self, text: &str) -> Result<ResumeAssessment, AppError> {
        // Nothing to judge; the documented zero case needs no upstream call.
        if text.trim().is_empty() {
            return Ok(self.fallback.assess(text));
        }

        let prompt = build_resume_prompt(truncate_chars(text, self.char_budget));
        let outcome = self
            .llm
            .call_json::<LlmVerdict>(&prompt, &resume_judge_system())
            .await
            .and_then(|verdict| verdict.into_assessment(text));

        self.settle(text, outcome)
    }
}

/// Cuts `text` to at most `budget` characters, on a char boundary.
fn truncate_chars(text: &str, budget: usize) -> &str {
    text.char_indices()
        .nth(budget)
        .map(|(idx, _)| &text[..idx])
        .unwrap_or(text)
}
