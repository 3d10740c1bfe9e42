mod candidate;
mod config;
mod errors;
mod grammar_client;
mod interview;
mod keywords;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
mod upstream;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::grammar_client::LanguageToolClient;
use crate::interview::questions::QuestionBank;
use crate::llm_client::LlmClient;
use crate::resume::scorer::{KeywordResumeScorer, LlmResumeScorer, ResumeScorer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireQuest API v{}", env!("CARGO_PKG_VERSION"));
    info!("Upstream failure policy: {:?}", config.upstream_policy);

    let resume_scorer = build_resume_scorer(&config)?;

    let grammar = Arc::new(LanguageToolClient::new(
        &config.grammar_api_url,
        &config.grammar_language,
        config.upstream_timeout,
    )?);
    info!(
        "Grammar client initialized ({}, {})",
        config.grammar_api_url, config.grammar_language
    );

    let questions = QuestionBank::default();
    if questions.is_empty() {
        warn!("Question bank is empty; level 2 will return 404");
    }
    info!("Question bank loaded ({} level-2 scenarios)", questions.len());

    let state = AppState {
        config: config.clone(),
        resume_scorer,
        grammar,
        questions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// KeywordResumeScorer unless LLM scoring is enabled and a key is configured.
fn build_resume_scorer(config: &Config) -> Result<Arc<dyn ResumeScorer>> {
    if !config.enable_llm_resume_scoring {
        info!("Résumé scorer: keyword");
        return Ok(Arc::new(KeywordResumeScorer::default()));
    }

    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ENABLE_LLM_RESUME_SCORING is set but ANTHROPIC_API_KEY is missing; using keyword scorer");
        return Ok(Arc::new(KeywordResumeScorer::default()));
    };

    let llm = LlmClient::new(api_key, config.upstream_timeout)?;
    info!("Résumé scorer: llm (model: {})", llm_client::MODEL);
    Ok(Arc::new(LlmResumeScorer::new(
        llm,
        config.llm_resume_char_budget,
        config.upstream_policy,
    )))
}
