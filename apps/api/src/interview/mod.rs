// Levels 2–5: free-text interview answers.
// QuestionBank serves level-2 scenarios; every stage is judged by judge::judge_answer
// with its own rubric.

pub mod handlers;
pub mod judge;
pub mod questions;
