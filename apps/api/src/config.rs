use std::time::Duration;

use anyhow::{Context, Result};

use crate::upstream::UpstreamPolicy;

const DEFAULT_GRAMMAR_API_URL: &str = "https://api.languagetool.org";

/// Application configuration loaded from environment variables.
/// Every variable is optional; the service boots with keyword-only scoring.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub enable_llm_resume_scoring: bool,
    pub llm_resume_char_budget: usize,
    pub grammar_api_url: String,
    pub grammar_language: String,
    pub upstream_timeout: Duration,
    pub upstream_policy: UpstreamPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            enable_llm_resume_scoring: false,
            llm_resume_char_budget: 6000,
            grammar_api_url: DEFAULT_GRAMMAR_API_URL.to_string(),
            grammar_language: "en-US".to_string(),
            upstream_timeout: Duration::from_secs(20),
            upstream_policy: UpstreamPolicy::Degrade,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            enable_llm_resume_scoring: parse_env(
                "ENABLE_LLM_RESUME_SCORING",
                defaults.enable_llm_resume_scoring,
            )
            .context("ENABLE_LLM_RESUME_SCORING must be true or false")?,
            llm_resume_char_budget: parse_env(
                "LLM_RESUME_CHAR_BUDGET",
                defaults.llm_resume_char_budget,
            )
            .context("LLM_RESUME_CHAR_BUDGET must be a positive integer")?,
            grammar_api_url: std::env::var("GRAMMAR_API_URL").unwrap_or(defaults.grammar_api_url),
            grammar_language: std::env::var("GRAMMAR_LANGUAGE")
                .unwrap_or(defaults.grammar_language),
            upstream_timeout: Duration::from_secs(
                parse_env("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout.as_secs())
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            upstream_policy: parse_env("UPSTREAM_FAILURE_POLICY", defaults.upstream_policy)
                .context("UPSTREAM_FAILURE_POLICY must be 'degrade' or 'surface'")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid value '{raw}' for {key}: {e}")),
        Err(_) => Ok(default),
    }
}
