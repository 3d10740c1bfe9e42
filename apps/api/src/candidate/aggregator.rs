//! Combines the résumé, grammar and answer stages into a total score and a
//! badge set.

use std::collections::BTreeSet;

use crate::models::candidate::{AnswerOutcome, Badge, CandidateRecord};

pub const ATS_WEIGHT: f64 = 0.25;
pub const GRAMMAR_WEIGHT: f64 = 0.25;
pub const ANSWER_WEIGHT: f64 = 0.5;

pub const ATS_BADGE_THRESHOLD: u32 = 70;
pub const GRAMMAR_BADGE_THRESHOLD: u32 = 80;
pub const ANSWERS_BADGE_THRESHOLD: u32 = 80;
/// Every answer must land within this many seconds for the speed badge.
pub const SPEED_LIMIT_SECS: u32 = 60;

/// `round(ats × 0.25 + grammar × 0.25 + answer × 0.5)`, clamped to 0–100.
pub fn compute_total(ats_score: u32, grammar_score: u32, answer_score: u32) -> u32 {
    let weighted = f64::from(ats_score) * ATS_WEIGHT
        + f64::from(grammar_score) * GRAMMAR_WEIGHT
        + f64::from(answer_score) * ANSWER_WEIGHT;
    (weighted.round() as u32).min(100)
}

/// All-or-nothing: every answer needs a recorded time, each within the limit.
/// No answers means no bonus.
pub fn time_bonus(elapsed: &[Option<u32>]) -> bool {
    !elapsed.is_empty()
        && elapsed
            .iter()
            .all(|secs| matches!(secs, Some(s) if *s <= SPEED_LIMIT_SECS))
}

pub fn award_badges(
    ats_score: u32,
    grammar_score: u32,
    answer_score: u32,
    time_bonus: bool,
) -> BTreeSet<Badge> {
    let mut badges = BTreeSet::new();
    if ats_score >= ATS_BADGE_THRESHOLD {
        badges.insert(Badge::AtsMaster);
    }
    if grammar_score >= GRAMMAR_BADGE_THRESHOLD {
        badges.insert(Badge::GrammarGuru);
    }
    if answer_score >= ANSWERS_BADGE_THRESHOLD {
        badges.insert(Badge::InterviewAce);
    }
    if time_bonus {
        badges.insert(Badge::SpeedDemon);
    }
    badges
}

/// Rounded mean of the judged answer scores; 0 when nothing was answered.
pub fn aggregate_answer_score(answers: &[AnswerOutcome]) -> u32 {
    if answers.is_empty() {
        return 0;
    }
    let sum: u64 = answers.iter().map(|a| u64::from(a.score.min(100))).sum();
    (sum as f64 / answers.len() as f64).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Record updates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageUpdate {
    Resume(u32),
    Grammar(u32),
    Answers(Vec<AnswerOutcome>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateMode {
    /// Keep whichever of the stored and new results is better.
    KeepBest,
    /// Replace the stored result unconditionally.
    Replace,
}

/// Records a completed stage. A stored score is never lowered.
pub fn record_stage(record: &mut CandidateRecord, update: StageUpdate) {
    apply(record, update, UpdateMode::KeepBest);
}

/// Explicit re-scoring: replaces the stage result even if it is lower.
pub fn rescore_stage(record: &mut CandidateRecord, update: StageUpdate) {
    apply(record, update, UpdateMode::Replace);
}

fn apply(record: &mut CandidateRecord, update: StageUpdate, mode: UpdateMode) {
    match update {
        StageUpdate::Resume(score) => set_score(&mut record.ats_score, score, mode),
        StageUpdate::Grammar(score) => set_score(&mut record.grammar_score, score, mode),
        StageUpdate::Answers(answers) => {
            let score = aggregate_answer_score(&answers);
            let accept = mode == UpdateMode::Replace
                || record.answers.is_empty()
                || score >= record.answer_score;
            if accept {
                record.answer_score = score;
                record.answers = answers;
            }
        }
    }
    refresh(record);
}

fn set_score(slot: &mut u32, score: u32, mode: UpdateMode) {
    debug_assert!(score <= 100, "stage score {score} out of range");
    let score = score.min(100);
    *slot = match mode {
        UpdateMode::KeepBest => (*slot).max(score),
        UpdateMode::Replace => score,
    };
}

fn refresh(record: &mut CandidateRecord) {
    let elapsed: Vec<Option<u32>> = record.answers.iter().map(|a| a.elapsed_seconds).collect();
    record.time_bonus = time_bonus(&elapsed);
    record.total_score = compute_total(record.ats_score, record.grammar_score, record.answer_score);
    record.badges = award_badges(
        record.ats_score,
        record.grammar_score,
        record.answer_score,
        record.time_bonus,
    );
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use uuid::Uuid;

    use super::*;

    fn answer(score: u32, secs: Option<u32>) -> AnswerOutcome {
        AnswerOutcome {
            score,
            elapsed_seconds: secs,
        }
    }

    #[test]
    fn test_total_weights() {
        // 80×0.25 + 60×0.25 + 90×0.5 = 20 + 15 + 45
        assert_eq!(compute_total(80, 60, 90), 80);
        assert_eq!(compute_total(100, 100, 100), 100);
        assert_eq!(compute_total(0, 0, 0), 0);
    }

    #[test]
    fn test_total_rounds() {
        assert_eq!(compute_total(1, 0, 0), 0); // 0.25
        assert_eq!(compute_total(3, 0, 1), 1); // 1.25
        assert_eq!(compute_total(3, 3, 0), 2); // 1.5
    }

    #[test]
    fn test_total_is_clamped() {
        assert_eq!(compute_total(400, 400, 400), 100);
    }

    #[test]
    fn test_time_bonus_fixtures() {
        assert!(time_bonus(&[Some(30), Some(45), Some(50)]));
        assert!(!time_bonus(&[Some(30), Some(70)]));
        assert!(!time_bonus(&[]));
    }

    #[test]
    fn test_time_bonus_missing_timing_forfeits() {
        assert!(!time_bonus(&[Some(30), None]));
        assert!(time_bonus(&[Some(60)]));
    }

    #[test]
    fn test_badge_fixture_awards_all_four() {
        let badges = award_badges(75, 85, 90, true);
        let expected: BTreeSet<Badge> = [
            Badge::SpeedDemon,
            Badge::InterviewAce,
            Badge::GrammarGuru,
            Badge::AtsMaster,
        ]
        .into_iter()
        .collect();
        assert_eq!(badges, expected);

        let json = serde_json::to_value(&badges).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_badge_thresholds_are_inclusive() {
        assert_eq!(award_badges(70, 80, 80, false).len(), 3);
        assert!(award_badges(69, 79, 79, false).is_empty());
    }

    #[test]
    fn test_answer_score_is_rounded_mean() {
        assert_eq!(aggregate_answer_score(&[]), 0);
        assert_eq!(
            aggregate_answer_score(&[answer(90, None), answer(71, None)]),
            81
        );
    }

    #[test]
    fn test_record_never_lowers_a_stage() {
        let mut record = CandidateRecord::new(Uuid::new_v4());
        record_stage(&mut record, StageUpdate::Resume(80));
        record_stage(&mut record, StageUpdate::Resume(60));
        assert_eq!(record.ats_score, 80);

        rescore_stage(&mut record, StageUpdate::Resume(60));
        assert_eq!(record.ats_score, 60);
    }

    #[test]
    fn test_record_keeps_best_answer_set() {
        let mut record = CandidateRecord::new(Uuid::new_v4());
        record_stage(
            &mut record,
            StageUpdate::Answers(vec![answer(90, Some(20)), answer(90, Some(30))]),
        );
        record_stage(&mut record, StageUpdate::Answers(vec![answer(10, None)]));
        assert_eq!(record.answer_score, 90);
        assert_eq!(record.answers.len(), 2);
        assert!(record.time_bonus);

        rescore_stage(&mut record, StageUpdate::Answers(vec![answer(10, None)]));
        assert_eq!(record.answer_score, 10);
        assert!(!record.time_bonus);
    }

    #[test]
    fn test_record_refreshes_total_and_badges() {
        let mut record = CandidateRecord::new(Uuid::new_v4());
        record_stage(&mut record, StageUpdate::Resume(75));
        record_stage(&mut record, StageUpdate::Grammar(85));
        record_stage(
            &mut record,
            StageUpdate::Answers(vec![
                answer(90, Some(30)),
                answer(90, Some(45)),
                answer(90, Some(50)),
            ]),
        );

        assert_eq!(record.total_score, compute_total(75, 85, 90));
        assert_eq!(record.badges, award_badges(75, 85, 90, true));
        assert_eq!(record.badges.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_total_monotonic_in_each_input(
            a in 0u32..=100,
            g in 0u32..=100,
            s in 0u32..=100,
            bump in 0u32..=100,
        ) {
            let base = compute_total(a, g, s);
            prop_assert!(compute_total((a + bump).min(100), g, s) >= base);
            prop_assert!(compute_total(a, (g + bump).min(100), s) >= base);
            prop_assert!(compute_total(a, g, (s + bump).min(100)) >= base);
            prop_assert!(base <= 100);
        }

        #[test]
        fn prop_badges_follow_thresholds(
            a in 0u32..=100,
            g in 0u32..=100,
            s in 0u32..=100,
            bonus in any::<bool>(),
            order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
        ) {
            let earned = [
                (a >= 70, Badge::AtsMaster),
                (g >= 80, Badge::GrammarGuru),
                (s >= 80, Badge::InterviewAce),
                (bonus, Badge::SpeedDemon),
            ];
            let mut expected = BTreeSet::new();
            for idx in order {
                let (hit, badge) = earned[idx];
                if hit {
                    expected.insert(badge);
                }
            }

            let badges = award_badges(a, g, s, bonus);
            prop_assert_eq!(badges.len(), earned.iter().filter(|(hit, _)| *hit).count());
            prop_assert_eq!(badges, expected);
        }
    }
}
