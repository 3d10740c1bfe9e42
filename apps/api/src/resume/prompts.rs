// LLM prompt text for the résumé judge.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{GAME_MASTER_PERSONA, JSON_ONLY_SYSTEM};

/// System prompt for résumé judging: persona plus JSON-only output rules.
pub fn resume_judge_system() -> String {
    format!("{GAME_MASTER_PERSONA} {JSON_ONLY_SYSTEM}")
}

/// Résumé judging prompt template. Replace `{resume_text}` before sending.
pub const RESUME_JUDGE_PROMPT_TEMPLATE: &str = r#"Score the following résumé the way an applicant tracking system would.

Return a JSON object with this EXACT schema (no extra fields):
{
  "ats_score": 72,
  "class_archetype": "Code Wizard",
  "xp_gained": 720,
  "strengths": ["Clear contact details", "Strong Python and SQL skills"],
  "boss_feedback": "Solid run. Add measurable results to your experience section."
}

Rules:
- ats_score is an integer from 0 to 100.
- class_archetype is one of "Code Wizard", "Corporate Paladin", "Legendary Hero", "Novice Recruiter".
- xp_gained is ats_score multiplied by 10.
- strengths holds at most 2 short items.
- boss_feedback is one or two sentences.

RÉSUMÉ:
{resume_text}"#;

pub fn build_resume_prompt(resume_text: &str) -> String {
    RESUME_JUDGE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
