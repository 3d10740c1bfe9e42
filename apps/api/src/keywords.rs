//! Keyword matching primitives shared by every résumé category and every
//! interview stage.
//!
//! Matching is plain substring presence over lower-cased text. Vocabulary
//! entries are lower-cased and deduplicated before counting, so "Python" and
//! "python" in the same vocabulary only ever count once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Lower-cases text once so every rule downstream can match against it.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Whitespace-delimited word count, used by length rules and gates.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Returns the unique vocabulary entries present in `text`, in vocabulary order.
///
/// `text` is expected to be normalized already. Blank vocabulary entries are
/// ignored; they would otherwise match every input.
pub fn match_keywords(text: &str, vocabulary: &[&str]) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut matched = Vec::new();

    for keyword in vocabulary {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || !seen.insert(keyword.clone()) {
            continue;
        }
        if text.contains(&keyword) {
            matched.push(keyword);
        }
    }

    matched
}

/// True when at least one of `phrases` appears in the normalized text.
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    !match_keywords(text, phrases).is_empty()
}

// ────────────────────────────────────────────────────────────────────────────
// Linear rule: N points per unique match, capped
// ────────────────────────────────────────────────────────────────────────────

/// A vocabulary scored linearly: `min(unique_matches × points_per_match, cap)`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub vocabulary: &'static [&'static str],
    pub points_per_match: u32,
    pub cap: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub matched: Vec<String>,
    pub points: u32,
}

impl KeywordRule {
    pub fn score(&self, text: &str) -> KeywordScore {
        let matched = match_keywords(text, self.vocabulary);
        let raw = (matched.len() as u32).saturating_mul(self.points_per_match);
        KeywordScore {
            points: raw.min(self.cap),
            matched,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tiered rule: point bands selected by match count
// ────────────────────────────────────────────────────────────────────────────

/// One band of a tier table. Triggered when the match count reaches `min_matches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub min_matches: usize,
    pub points: u32,
    pub feedback: &'static str,
}

/// Tiers ordered from the highest `min_matches` down to a `0` floor.
#[derive(Debug, Clone, Copy)]
pub struct TierTable(pub &'static [Tier]);

impl TierTable {
    /// Picks the first tier whose threshold the count reaches.
    pub fn select(&self, match_count: usize) -> Option<&'static Tier> {
        self.0.iter().find(|tier| match_count >= tier.min_matches)
    }
}

/// A tiered vocabulary: the unique match count chooses a tier from the table.
#[derive(Debug, Clone, Copy)]
pub struct TieredRule {
    pub vocabulary: &'static [&'static str],
    pub tiers: TierTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredScore {
    pub matched: Vec<String>,
    pub points: u32,
    pub feedback: &'static str,
}

impl TieredRule {
    /// Scores against `vocabulary`, which is either this rule's own or the
    /// one carried by a specific question.
    pub fn score_with(&self, text: &str, vocabulary: &[&str]) -> TieredScore {
        let matched = match_keywords(text, vocabulary);
        let (points, feedback) = self
            .tiers
            .select(matched.len())
            .map(|tier| (tier.points, tier.feedback))
            .unwrap_or((0, ""));
        TieredScore {
            matched,
            points,
            feedback,
        }
    }
}
