// Final tally: stage scores → weighted total + badges.
// CandidateRecord is only mutated through aggregator::{record_stage, rescore_stage}.

pub mod aggregator;
pub mod handlers;
