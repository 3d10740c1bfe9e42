//! Failure policy for calls to external collaborators (LLM judge, grammar
//! service). Chosen once at startup and applied through [`UpstreamPolicy::resolve`]
//! at every call site, so the two services can never disagree.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::bail;
use tracing::warn;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpstreamPolicy {
    /// Substitute a documented neutral result and keep going.
    #[default]
    Degrade,
    /// Return the failure to the caller as an upstream error.
    Surface,
}

impl FromStr for UpstreamPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" => Ok(UpstreamPolicy::Degrade),
            "surface" => Ok(UpstreamPolicy::Surface),
            other => bail!("unknown upstream failure policy '{other}' (expected degrade|surface)"),
        }
    }
}

impl UpstreamPolicy {
    /// Resolves an upstream result: successes pass through; failures either
    /// become `degraded()` or are surfaced through `surface`.
    pub fn resolve<T, E: Display>(
        self,
        service: &str,
        result: Result<T, E>,
        degraded: impl FnOnce() -> T,
        surface: impl FnOnce(String) -> AppError,
    ) -> Result<T, AppError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => match self {
                UpstreamPolicy::Degrade => {
                    warn!("{service} call failed, using neutral fallback: {e}");
                    Ok(degraded())
                }
                UpstreamPolicy::Surface => Err(surface(e.to_string())),
            },
        }
    }
}
