//! Grammar client: counts language errors in free text through an external
//! LanguageTool-compatible service and maps the count to a 0–100 score.
//!
//! `GrammarChecker` is the seam: handlers only see the trait, so tests swap in
//! a stub and the HTTP client stays the one place that performs I/O.

pub mod handlers;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::upstream::UpstreamPolicy;

const POINTS_PER_ERROR: u32 = 5;
/// Score reported when the service fails and the policy is `degrade`.
pub const NEUTRAL_GRAMMAR_SCORE: u32 = 50;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Number of grammar/spelling issues found in `text`.
    async fn count_errors(&self, text: &str) -> Result<u32, GrammarError>;
}

/// `max(0, 100 − errors × 5)`
pub fn grammar_score(errors: u32) -> u32 {
    100u32.saturating_sub(errors.saturating_mul(POINTS_PER_ERROR))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarReport {
    pub grammar_score: u32,
    /// `None` when the service failed and the neutral score was substituted.
    pub errors: Option<u32>,
    pub degraded: bool,
}

impl GrammarReport {
    fn from_errors(errors: u32) -> Self {
        Self {
            grammar_score: grammar_score(errors),
            errors: Some(errors),
            degraded: false,
        }
    }

    fn neutral() -> Self {
        Self {
            grammar_score: NEUTRAL_GRAMMAR_SCORE,
            errors: None,
            degraded: true,
        }
    }
}

/// Runs the checker and applies the upstream failure policy.
pub async fn check_grammar(
    checker: &dyn GrammarChecker,
    text: &str,
    policy: UpstreamPolicy,
) -> Result<GrammarReport, AppError> {
    let result = checker
        .count_errors(text)
        .await
        .map(GrammarReport::from_errors);
    policy.resolve("grammar", result, GrammarReport::neutral, AppError::Grammar)
}

// ────────────────────────────────────────────────────────────────────────────
// LanguageTool HTTP client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<serde_json::Value>,
}

#[derive(Clone)]
pub struct LanguageToolClient {
    client: Client,
    base_url: String,
    language: String,
}

impl LanguageToolClient {
    pub fn new(base_url: &str, language: &str, timeout: Duration) -> Result<Self, GrammarError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn count_errors(&self, text: &str) -> Result<u32, GrammarError> {
        let response = self
            .client
            .post(format!("{}/v2/check", self.base_url))
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GrammarError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let errors = parse_error_count(&body)?;
        debug!("grammar check found {errors} issue(s)");
        Ok(errors)
    }
}

fn parse_error_count(body: &str) -> Result<u32, GrammarError> {
    let parsed: CheckResponse = serde_json::from_str(body)?;
    Ok(u32::try_from(parsed.matches.len()).unwrap_or(u32::MAX))
}
