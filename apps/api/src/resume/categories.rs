//! Category scoring: applies the keyword rules, contact patterns and length
//! bands to extracted résumé text and produces a [`Scorecard`].
//!
//! Categories are independent; their capped values sum to the résumé score.
//! Empty or garbled text is never an error, it simply scores zero everywhere.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::keywords::{match_keywords, normalize, word_count, KeywordRule};

pub const CONTACT_MAX: u32 = 15;
pub const SECTIONS_MAX: u32 = 20;
pub const HARD_SKILLS_MAX: u32 = 40;
pub const SOFT_SKILLS_MAX: u32 = 15;
pub const LENGTH_MAX: u32 = 10;

const EMAIL_POINTS: u32 = 10;
const PHONE_POINTS: u32 = 5;
const SECTION_POINTS: u32 = 10;

pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 1000;
const OVERLONG_POINTS: u32 = 5;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}").expect("email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(\d{3}\)\s?|\b\d{3}[-.\s])\d{3}[-.\s]\d{4}\b|\b\d{10}\b").expect("phone regex")
});

// ────────────────────────────────────────────────────────────────────────────
// Vocabularies
// ────────────────────────────────────────────────────────────────────────────

pub const HARD_SKILLS: &[&str] = &[
    "python",
    "golang",
    "sql",
    "c++",
    "docker",
    "kubernetes",
    "linux",
    "graphql",
    "typescript",
    "tensorflow",
    "machine learning",
    "data analysis",
    "mongodb",
    "tableau",
    "figma",
    "scrum",
    "html",
    "css",
    "azure",
    "node.js",
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "collaboration",
    "problem solving",
    "adaptability",
    "creativity",
    "initiative",
    "mentored",
    "managed",
    "supervised",
    "delegated",
    "coordinated",
    "negotiated",
    "organized",
    "management",
    "project management",
];

/// Terms that signal people management. Counted on their own, so titles like
/// "manager" register even though they earn no soft-skill points.
pub const MANAGEMENT_TERMS: &[&str] = &[
    "leadership",
    "mentored",
    "managed",
    "supervised",
    "delegated",
    "coordinated",
    "management",
    "project management",
    "manager",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "education",
    "university",
    "college",
    "bachelor",
    "degree",
    "academic",
];

pub const EXPERIENCE_TERMS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "internship",
    "professional background",
];

/// The full rule set for a scan. Passed explicitly so alternative tables can
/// be swapped in without touching the scorer.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    pub hard_skills: KeywordRule,
    pub soft_skills: KeywordRule,
    pub management_terms: &'static [&'static str],
    pub education_terms: &'static [&'static str],
    pub experience_terms: &'static [&'static str],
}

pub const DEFAULT_CATEGORY_CONFIG: CategoryConfig = CategoryConfig {
    hard_skills: KeywordRule {
        vocabulary: HARD_SKILLS,
        points_per_match: 5,
        cap: HARD_SKILLS_MAX,
    },
    soft_skills: KeywordRule {
        vocabulary: SOFT_SKILLS,
        points_per_match: 3,
        cap: SOFT_SKILLS_MAX,
    },
    management_terms: MANAGEMENT_TERMS,
    education_terms: EDUCATION_TERMS,
    experience_terms: EXPERIENCE_TERMS,
};

impl Default for CategoryConfig {
    fn default() -> Self {
        DEFAULT_CATEGORY_CONFIG
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorecard
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub points: u32,
    pub max: u32,
    pub matched: Vec<String>,
}

impl CategoryScore {
    fn new(points: u32, max: u32, matched: Vec<String>) -> Self {
        debug_assert!(points <= max, "category points {points} exceed cap {max}");
        Self {
            points: points.min(max),
            max,
            matched,
        }
    }
}

/// Raw observations behind the category points, consumed by feedback and
/// classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub word_count: usize,
    pub management_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub contact: CategoryScore,
    pub sections: CategoryScore,
    pub hard_skills: CategoryScore,
    pub soft_skills: CategoryScore,
    pub length: CategoryScore,
    pub signals: ResumeSignals,
}

impl Scorecard {
    /// Sum of the capped category values, 0 – 100.
    pub fn total(&self) -> u32 {
        let total = self.contact.points
            + self.sections.points
            + self.hard_skills.points
            + self.soft_skills.points
            + self.length.points;
        debug_assert!(total <= 100, "résumé total {total} out of range");
        total.min(100)
    }

    pub fn tech_count(&self) -> usize {
        self.hard_skills.matched.len()
    }

    pub fn management_count(&self) -> usize {
        self.signals.management_count
    }
}

/// Scores extracted résumé text across every category.
pub fn score_categories(text: &str, config: &CategoryConfig) -> Scorecard {
    let text = normalize(text);

    let has_email = EMAIL_RE.is_match(&text);
    let has_phone = PHONE_RE.is_match(&text);
    let mut contact_items = Vec::new();
    let mut contact_points = 0;
    if has_email {
        contact_points += EMAIL_POINTS;
        contact_items.push("email".to_string());
    }
    if has_phone {
        contact_points += PHONE_POINTS;
        contact_items.push("phone".to_string());
    }

    let education = match_keywords(&text, config.education_terms);
    let experience = match_keywords(&text, config.experience_terms);
    let has_education = !education.is_empty();
    let has_experience = !experience.is_empty();
    let section_points = u32::from(has_education) * SECTION_POINTS
        + u32::from(has_experience) * SECTION_POINTS;
    let section_items = education.into_iter().chain(experience).collect();

    let hard = config.hard_skills.score(&text);
    let soft = config.soft_skills.score(&text);
    let management_count = match_keywords(&text, config.management_terms).len();

    let words = word_count(&text);
    let length_points = length_points(words);

    Scorecard {
        contact: CategoryScore::new(contact_points, CONTACT_MAX, contact_items),
        sections: CategoryScore::new(section_points, SECTIONS_MAX, section_items),
        hard_skills: CategoryScore::new(hard.points, HARD_SKILLS_MAX, hard.matched),
        soft_skills: CategoryScore::new(soft.points, SOFT_SKILLS_MAX, soft.matched),
        length: CategoryScore::new(length_points, LENGTH_MAX, Vec::new()),
        signals: ResumeSignals {
            has_email,
            has_phone,
            has_education,
            has_experience,
            word_count: words,
            management_count,
        },
    }
}

fn length_points(words: usize) -> u32 {
    match words {
        w if w < MIN_WORDS => 0,
        w if w <= MAX_WORDS => LENGTH_MAX,
        _ => OVERLONG_POINTS,
    }
}
