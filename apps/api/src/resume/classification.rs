//! Archetype classification: maps scorecard tallies to a gamified class label.

use serde::{Deserialize, Serialize};

/// Gamified class assigned after a résumé scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    CodeWizard,
    CorporatePaladin,
    LegendaryHero,
    NoviceRecruiter,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::CodeWizard => "Code Wizard",
            Archetype::CorporatePaladin => "Corporate Paladin",
            Archetype::LegendaryHero => "Legendary Hero",
            Archetype::NoviceRecruiter => "Novice Recruiter",
        }
    }
}

/// Technical lead a résumé needs over management signals to be a Code Wizard.
const TECH_MARGIN: usize = 2;
const ELITE_SCORE: u32 = 80;

/// Rules are evaluated strictly in this order; the first hit wins.
///
/// 1. `tech > mgmt + 2` → Code Wizard
/// 2. `mgmt > tech`     → Corporate Paladin
/// 3. `score > 80`      → Legendary Hero
/// 4. otherwise         → Novice Recruiter
pub fn classify(tech: usize, mgmt: usize, score: u32) -> Archetype {
    if tech > mgmt + TECH_MARGIN {
        Archetype::CodeWizard
    } else if mgmt > tech {
        Archetype::CorporatePaladin
    } else if score > ELITE_SCORE {
        Archetype::LegendaryHero
    } else {
        Archetype::NoviceRecruiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_lead_wins_first() {
        assert_eq!(classify(6, 3, 10), Archetype::CodeWizard);
    }

    #[test]
    fn test_tech_margin_is_strict() {
        // tech == mgmt + 2 is not enough; falls through to the later rules
        assert_eq!(classify(5, 3, 50), Archetype::NoviceRecruiter);
        assert_eq!(classify(5, 3, 90), Archetype::LegendaryHero);
    }

    #[test]
    fn test_management_beats_tech() {
        assert_eq!(classify(1, 2, 95), Archetype::CorporatePaladin);
    }

    #[test]
    fn test_balanced_high_score_is_elite() {
        assert_eq!(classify(3, 3, 81), Archetype::LegendaryHero);
    }

    #[test]
    fn test_elite_threshold_is_strict() {
        assert_eq!(classify(3, 3, 80), Archetype::NoviceRecruiter);
    }

    #[test]
    fn test_empty_resume_is_novice() {
        assert_eq!(classify(0, 0, 0), Archetype::NoviceRecruiter);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for tech in 0..12 {
            for mgmt in 0..8 {
                for score in [0, 40, 80, 81, 100] {
                    assert_eq!(classify(tech, mgmt, score), classify(tech, mgmt, score));
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Archetype::CodeWizard.label(), "Code Wizard");
        assert_eq!(Archetype::NoviceRecruiter.label(), "Novice Recruiter");
    }
}
