//! Greedy assignment: repeatedly commit the highest remaining cell of the
//! score matrix.
//!
//! This is a heuristic, not an exact weighted-matching solver: it can miss
//! the true optimum, and it rescans the full remaining matrix region every
//! iteration (O(k·D·R) for k commits). Both properties are part of the
//! observable behavior and are kept deliberately.

use crate::scoring::suitability_score;

use super::algorithm::AssignmentAlgorithm;
use super::types::{AssignmentOutcome, ScoreMatrix};

/// Greedy matcher over the full score matrix.
///
/// # Algorithm Behavior
///
/// 1. Build the D×R score matrix from the key lists.
/// 2. Scan every (available row, available column) cell in ascending row
///    then ascending column order; only a strictly greater value replaces
///    the current best, so the first cell holding the maximum wins ties.
///    This scan order is the fixed, documented tie-break.
/// 3. If the best remaining value is 0, stop without committing: no later
///    pair can add score, so nothing further is ever assigned even while
///    unmatched rows and columns remain.
/// 4. Otherwise commit the pair and retire its row and column.
/// 5. Stop after `min(D, R)` commits.
///
/// The returned total is recomputed by re-scoring every committed pair
/// rather than accumulated during the loop.
#[derive(Debug, Default)]
pub struct GreedyAssignment;

impl AssignmentAlgorithm for GreedyAssignment {
    fn assign(&self, destination_keys: &[String], driver_keys: &[String]) -> AssignmentOutcome {
        let matrix = ScoreMatrix::build(destination_keys, driver_keys);
        let limit = destination_keys.len().min(driver_keys.len());

        let mut available_rows: Vec<usize> = (0..matrix.rows()).collect();
        let mut available_cols: Vec<usize> = (0..matrix.columns()).collect();
        let mut assignments = Vec::new();

        while assignments.len() < limit {
            let mut best: Option<(usize, usize, f64)> = None;
            for &row in &available_rows {
                for &col in &available_cols {
                    let value = matrix.at(row, col);
                    match best {
                        None => best = Some((row, col, value)),
                        Some((_, _, best_value)) if value > best_value => {
                            best = Some((row, col, value))
                        }
                        _ => {}
                    }
                }
            }

            let Some((row, col, value)) = best else { break };
            if value == 0.0 {
                break;
            }

            assignments.push((destination_keys[row].clone(), driver_keys[col].clone()));
            available_rows.retain(|&r| r != row);
            available_cols.retain(|&c| c != col);
        }

        let total_score = assignments
            .iter()
            .map(|(destination, driver)| suitability_score(destination, driver))
            .sum();

        AssignmentOutcome {
            total_score,
            assignments,
        }
    }
}
