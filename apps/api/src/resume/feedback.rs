//! Feedback: one message per unmet or marginal category rule, in the order
//! the categories are scored, plus a short "boss line" chosen by score band.

use serde::{Deserialize, Serialize};

use crate::resume::categories::{Scorecard, MAX_WORDS, MIN_WORDS};

pub const SUCCESS_MESSAGE: &str =
    "Outstanding scan! Your résumé is ready for the next level.";

const HIGH_BAND: u32 = 80;
const MID_BAND: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub items: Vec<String>,
    pub short: String,
}

pub fn build_feedback(card: &Scorecard, total: u32) -> Feedback {
    let items = feedback_items(card);
    let short = short_feedback(&items, total);
    Feedback { items, short }
}

fn feedback_items(card: &Scorecard) -> Vec<String> {
    let signals = &card.signals;
    let mut items = Vec::new();

    if !signals.has_email {
        items.push("Missing email address: add one so recruiters can reach you.".to_string());
    }
    if !signals.has_phone {
        items.push("Missing phone number: add a contact number in the header.".to_string());
    }
    if !signals.has_education {
        items.push("Missing Education section: list your degree or training.".to_string());
    }
    if !signals.has_experience {
        items.push("Missing Experience section: describe your work history.".to_string());
    }

    let hard = &card.hard_skills;
    if hard.matched.is_empty() {
        items.push(
            "Missing technical skills: add a skills section (e.g. Python, SQL, Docker)."
                .to_string(),
        );
    } else if hard.points < hard.max {
        items.push(format!(
            "Low technical keyword density: {} skill(s) found ({}). Add more relevant tools.",
            hard.matched.len(),
            hard.matched.join(", ")
        ));
    }

    let soft = &card.soft_skills;
    if soft.matched.is_empty() {
        items.push(
            "Missing soft skills: show leadership, teamwork or communication with action verbs."
                .to_string(),
        );
    } else if soft.points < soft.max {
        items.push(format!(
            "Few soft-skill signals: {} found ({}). Use more action verbs.",
            soft.matched.len(),
            soft.matched.join(", ")
        ));
    }

    let words = signals.word_count;
    if words < MIN_WORDS {
        items.push(format!(
            "Résumé is too short ({words} words). Aim for {MIN_WORDS} to {MAX_WORDS} words."
        ));
    } else if words > MAX_WORDS {
        items.push(format!(
            "Résumé is too long ({words} words). Trim it to under {MAX_WORDS} words."
        ));
    }

    items
}

/// High score → success message; mid → first item; low → first two items.
fn short_feedback(items: &[String], total: u32) -> String {
    if total >= HIGH_BAND || items.is_empty() {
        return SUCCESS_MESSAGE.to_string();
    }
    let take = if total >= MID_BAND { 1 } else { 2 };
    items
        .iter()
        .take(take)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::categories::tests::full_marks_resume;
    use crate::resume::categories::{score_categories, CategoryConfig};

    fn feedback_for(text: &str) -> Feedback {
        let card = score_categories(text, &CategoryConfig::default());
        let total = card.total();
        build_feedback(&card, total)
    }

    #[test]
    fn test_empty_text_lists_every_missing_message() {
        let feedback = feedback_for("");
        assert_eq!(feedback.items.len(), 7);
        assert!(feedback.items[0].contains("email"));
        assert!(feedback.items[1].contains("phone"));
        assert!(feedback.items[2].contains("Education"));
        assert!(feedback.items[3].contains("Experience"));
        assert!(feedback.items[4].contains("technical skills"));
        assert!(feedback.items[5].contains("soft skills"));
        assert!(feedback.items[6].contains("too short"));
    }

    #[test]
    fn test_low_score_short_form_uses_two_items() {
        let feedback = feedback_for("");
        assert_eq!(
            feedback.short,
            format!("{} {}", feedback.items[0], feedback.items[1])
        );
    }

    #[test]
    fn test_perfect_resume_gets_success_message() {
        let feedback = feedback_for(&full_marks_resume());
        assert!(feedback.items.is_empty());
        assert_eq!(feedback.short, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_mid_band_uses_first_item_only() {
        let items = vec!["first".to_string(), "second".to_string()];
        assert_eq!(short_feedback(&items, 60), "first");
    }

    #[test]
    fn test_high_band_ignores_items() {
        let items = vec!["first".to_string()];
        assert_eq!(short_feedback(&items, 85), SUCCESS_MESSAGE);
    }

    #[test]
    fn test_marginal_skills_are_reported() {
        let feedback = feedback_for("python and sql, leadership");
        assert!(feedback
            .items
            .iter()
            .any(|item| item.contains("2 skill(s) found (python, sql)")));
        assert!(feedback.items.iter().any(|item| item.contains("Few soft-skill")));
    }

    #[test]
    fn test_overlong_resume_is_flagged() {
        let feedback = feedback_for(&"word ".repeat(1200));
        assert!(feedback.items.iter().any(|item| item.contains("too long")));
    }
}
