// Level 1: résumé scan.
// Extracted text → category scorecard → archetype + feedback → ResumeAssessment.
// LLM judging is optional and goes through llm_client via scorer::LlmResumeScorer.

pub mod categories;
pub mod classification;
pub mod extract;
pub mod feedback;
pub mod handlers;
pub mod prompts;
pub mod scorer;

use crate::models::resume::ResumeAssessment;
use crate::resume::categories::{score_categories, CategoryConfig};
use crate::resume::classification::classify;
use crate::resume::feedback::build_feedback;

/// Rule-based assessment of extracted résumé text. Pure; never fails.
pub fn assess_resume(text: &str, config: &CategoryConfig) -> ResumeAssessment {
    let card = score_categories(text, config);
    let total = card.total();
    let archetype = classify(card.tech_count(), card.management_count(), total);
    let feedback = build_feedback(&card, total);

    ResumeAssessment::new(
        text.to_string(),
        total,
        archetype.label().to_string(),
        feedback.items,
        feedback.short,
        Some(card),
        "keyword",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::categories::tests::full_marks_resume;

    #[test]
    fn test_empty_text_assessment() {
        let assessment = assess_resume("", &CategoryConfig::default());
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.xp, 0);
        assert_eq!(assessment.char_class, "Novice Recruiter");
        assert_eq!(assessment.feedback.len(), 7);
    }

    #[test]
    fn test_full_marks_assessment() {
        let assessment = assess_resume(&full_marks_resume(), &CategoryConfig::default());
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.xp, 1000);
        assert_eq!(assessment.char_class, "Code Wizard");
        assert!(assessment.feedback.is_empty());
        assert!(assessment.strengths.is_empty());
    }

    #[test]
    fn test_manager_resume_is_paladin() {
        let text = "Led the team: leadership, managed budgets, mentored juniors, supervised \
                    operations. Python.";
        let assessment = assess_resume(text, &CategoryConfig::default());
        assert_eq!(assessment.char_class, "Corporate Paladin");
    }

    #[test]
    fn test_management_only_resume_is_paladin() {
        let text = "Operations manager. Responsible for management of a 40 person team and \
                    project management.";
        let assessment = assess_resume(text, &CategoryConfig::default());
        assert_eq!(assessment.char_class, "Corporate Paladin");
    }

    #[test]
    fn test_serialized_shape() {
        let assessment = assess_resume("python", &CategoryConfig::default());
        let json = serde_json::to_value(&assessment).unwrap();
        assert!(json.get("score").is_some());
        assert!(json.get("char_class").is_some());
        assert!(json.get("xp").is_some());
        assert!(json.get("feedback").is_some());
        assert_eq!(json["strengths"], serde_json::json!([]));
        assert!(json.get("source_text").is_none());
    }
}
