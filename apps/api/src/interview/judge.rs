//! Answer judge: one tiered-keyword routine, parameterized per stage.
//!
//! Every stage is a [`StageRubric`]: a vocabulary (fixed, or taken from the
//! question), a tier table keyed on unique matches, and optional length and
//! phrase rules. Adding a stage means adding a rubric, not new scoring code.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::questions::QuestionBank;
use crate::keywords::{contains_any, normalize, word_count, Tier, TierTable, TieredRule};
use crate::models::interview::{AnswerJudgment, AnswerSubmission, JudgmentBreakdown};
use crate::models::resume::XP_PER_POINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Level 2: situational question, judged against the question's vocabulary.
    Situational,
    /// Level 3: Situation/Task/Action/Result structure.
    StarMethod,
    /// Level 4: prioritisation and planning.
    Strategy,
    /// Level 5: salary and growth conversation.
    GrowthMindset,
}

impl Stage {
    pub fn rubric(self) -> &'static StageRubric {
        match self {
            Stage::Situational => &SITUATIONAL,
            Stage::StarMethod => &STAR_METHOD,
            Stage::Strategy => &STRATEGY,
            Stage::GrowthMindset => &GROWTH_MINDSET,
        }
    }
}

/// Word-count gate plus bonus for longer answers.
#[derive(Debug, Clone, Copy)]
pub struct LengthRules {
    pub min_words: usize,
    pub too_short_score: u32,
    pub too_short_feedback: &'static str,
    pub bonus_above_words: usize,
    pub bonus_points: u32,
    pub bonus_feedback: &'static str,
    pub no_bonus_feedback: &'static str,
}

/// Flat bonus when any of the phrases appears.
#[derive(Debug, Clone, Copy)]
pub struct PhraseBonus {
    pub phrases: &'static [&'static str],
    pub points: u32,
    pub feedback: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StageRubric {
    pub stage: Stage,
    pub keywords: TieredRule,
    /// When set, `keywords.vocabulary` is ignored and the question's own
    /// vocabulary is used instead.
    pub per_question: bool,
    pub length: Option<LengthRules>,
    pub phrase_bonus: Option<PhraseBonus>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rubrics
// ────────────────────────────────────────────────────────────────────────────

pub const PROFESSIONAL_PHRASES: &[&str] = &[
    "sorry",
    "apologize",
    "help",
    "listened",
    "understood",
    "calm",
    "compromise",
];

pub const SITUATIONAL: StageRubric = StageRubric {
    stage: Stage::Situational,
    keywords: TieredRule {
        vocabulary: &[],
        tiers: TierTable(&[
            Tier {
                min_matches: 3,
                points: 40,
                feedback: "Excellent! You covered the key points.",
            },
            Tier {
                min_matches: 1,
                points: 20,
                feedback: "Good start. Address more of the situation's key points.",
            },
            Tier {
                min_matches: 0,
                points: 0,
                feedback: "Your answer misses the key points of this situation.",
            },
        ]),
    },
    per_question: true,
    length: Some(LengthRules {
        min_words: 10,
        too_short_score: 10,
        too_short_feedback: "Too short. Write at least 10 words so your answer can be judged.",
        bonus_above_words: 15,
        bonus_points: 20,
        bonus_feedback: "Good length.",
        no_bonus_feedback: "Add more detail to earn the length bonus.",
    }),
    phrase_bonus: Some(PhraseBonus {
        phrases: PROFESSIONAL_PHRASES,
        points: 10,
        feedback: "Professional tone.",
    }),
};

pub const STAR_METHOD: StageRubric = StageRubric {
    stage: Stage::StarMethod,
    keywords: TieredRule {
        vocabulary: &[
            "situation",
            "task",
            "action",
            "result",
            "handled",
            "resolved",
            "outcome",
        ],
        tiers: TierTable(&[
            Tier {
                min_matches: 3,
                points: 50,
                feedback: "STAR method detected.",
            },
            Tier {
                min_matches: 0,
                points: 10,
                feedback: "Try to structure your answer as Situation, Task, Action, Result.",
            },
        ]),
    },
    per_question: false,
    length: None,
    phrase_bonus: Some(PhraseBonus {
        phrases: &["listened", "understood", "calm", "perspective", "compromise"],
        points: 30,
        feedback: "Good soft skills shown.",
    }),
};

pub const STRATEGY: StageRubric = StageRubric {
    stage: Stage::Strategy,
    keywords: TieredRule {
        vocabulary: &[
            "prioritize",
            "delegate",
            "communicate",
            "plan",
            "timeline",
            "negotiate",
        ],
        tiers: TierTable(&[
            Tier {
                min_matches: 2,
                points: 60,
                feedback: "Strategic thinking detected.",
            },
            Tier {
                min_matches: 0,
                points: 20,
                feedback: "Consider prioritization and communication.",
            },
        ]),
    },
    per_question: false,
    length: None,
    phrase_bonus: None,
};

pub const GROWTH_MINDSET: StageRubric = StageRubric {
    stage: Stage::GrowthMindset,
    keywords: TieredRule {
        vocabulary: &["growth", "learn", "long-term", "contribute", "market", "fair"],
        tiers: TierTable(&[
            Tier {
                min_matches: 1,
                points: 50,
                feedback: "Good growth mindset.",
            },
            Tier {
                min_matches: 0,
                points: 20,
                feedback: "Be specific about your goals.",
            },
        ]),
    },
    per_question: false,
    length: None,
    phrase_bonus: None,
};

// ────────────────────────────────────────────────────────────────────────────
// Judging
// ────────────────────────────────────────────────────────────────────────────

/// Validates a submission, resolves its vocabulary and judges it.
pub fn judge_submission(
    stage: Stage,
    submission: &AnswerSubmission,
    bank: &QuestionBank,
) -> Result<AnswerJudgment, AppError> {
    if submission.answer.trim().is_empty() {
        return Err(AppError::Validation("Answer text is required".to_string()));
    }

    let rubric = stage.rubric();
    let vocabulary = if rubric.per_question {
        let id = submission
            .question_id
            .ok_or_else(|| AppError::Validation("Question id is required".to_string()))?;
        bank.get(id)
            .ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?
            .keywords
    } else {
        rubric.keywords.vocabulary
    };

    Ok(judge_answer(
        rubric,
        vocabulary,
        &submission.answer,
        submission.elapsed_seconds,
    ))
}

/// Scores one answer against a rubric. Pure; the result is clamped to 0–100.
pub fn judge_answer(
    rubric: &StageRubric,
    vocabulary: &[&str],
    answer: &str,
    elapsed_seconds: Option<u32>,
) -> AnswerJudgment {
    let text = normalize(answer);
    let words = word_count(&text);

    if let Some(length) = rubric.length.filter(|l| words < l.min_words) {
        return AnswerJudgment {
            stage: rubric.stage,
            score: length.too_short_score,
            feedback: length.too_short_feedback.to_string(),
            xp: length.too_short_score * XP_PER_POINT,
            matched_keywords: Default::default(),
            breakdown: JudgmentBreakdown::default(),
            too_short: true,
            elapsed_seconds,
        };
    }

    let mut feedback = Vec::new();
    let mut breakdown = JudgmentBreakdown::default();

    if let Some(length) = rubric.length {
        if words > length.bonus_above_words {
            breakdown.length_bonus = length.bonus_points;
            feedback.push(format!("{} (+{})", length.bonus_feedback, length.bonus_points));
        } else {
            feedback.push(length.no_bonus_feedback.to_string());
        }
    }

    let tiered = rubric.keywords.score_with(&text, vocabulary);
    breakdown.keyword_points = tiered.points;
    if tiered.matched.is_empty() {
        feedback.push(format!("{} (+{})", tiered.feedback, tiered.points));
    } else {
        feedback.push(format!(
            "{} Keywords matched: {} (+{})",
            tiered.feedback,
            tiered.matched.join(", "),
            tiered.points
        ));
    }

    if let Some(bonus) = rubric.phrase_bonus {
        if contains_any(&text, bonus.phrases) {
            breakdown.phrase_bonus = bonus.points;
            feedback.push(format!("{} (+{})", bonus.feedback, bonus.points));
        }
    }

    let score =
        (breakdown.length_bonus + breakdown.keyword_points + breakdown.phrase_bonus).min(100);

    AnswerJudgment {
        stage: rubric.stage,
        score,
        feedback: feedback.join(" "),
        xp: score * XP_PER_POINT,
        matched_keywords: tiered.matched.into_iter().collect(),
        breakdown,
        too_short: false,
        elapsed_seconds,
    }
}
