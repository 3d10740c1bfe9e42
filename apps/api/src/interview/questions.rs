//! Situational-judgment questions for level 2. Static; never mutated.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub scenario: &'static str,
    /// Vocabulary the answer is judged against. Never sent to the candidate.
    #[serde(skip)]
    pub keywords: &'static [&'static str],
}

pub const LEVEL_2_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        scenario: "A client is angry on Friday at 5 PM because their project is delayed. \
                   They are demanding an immediate fix.",
        keywords: &["listen", "empathy", "apologize", "resolve", "monday", "calm"],
    },
    Question {
        id: 2,
        scenario: "Two team members are arguing over who should lead the new project. \
                   It's affecting team morale.",
        keywords: &["mediate", "listen", "compromise", "strengths", "meeting", "roles"],
    },
    Question {
        id: 3,
        scenario: "You discover a mistake in a report you sent to the CEO yesterday.",
        keywords: &["admit", "correct", "immediately", "apologize", "plan", "fix"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(LEVEL_2_QUESTIONS)
    }
}

impl QuestionBank {
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    pub fn get(&self, id: u32) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Uniform pick over the whole bank. Repeats across calls are allowed.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static Question> {
        self.questions.choose(rng)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
