pub mod algorithm;
pub mod greedy;
pub mod types;

pub use algorithm::AssignmentAlgorithm;
pub use greedy::GreedyAssignment;
pub use types::{AssignmentOutcome, ScoreMatrix};
