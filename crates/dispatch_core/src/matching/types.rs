use crate::scoring::suitability_score;

/// Rectangular table of pairwise suitability scores, indexed by
/// (destination position, driver position).
///
/// Built fresh from the current key lists for each assignment run; there is
/// no caching across runs.
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    cells: Vec<Vec<f64>>,
}

impl ScoreMatrix {
    /// Score every destination/driver pair. O(D·R) score evaluations.
    pub fn build(destination_keys: &[String], driver_keys: &[String]) -> Self {
        let cells = destination_keys
            .iter()
            .map(|destination| {
                driver_keys
                    .iter()
                    .map(|driver| suitability_score(destination, driver))
                    .collect()
            })
            .collect();
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }
}

/// Result of one assignment run: the committed (destination key, driver key)
/// pairs in commit order, and the realized total score over those pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentOutcome {
    pub total_score: f64,
    pub assignments: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matrix_shape_matches_key_lists() {
        let destinations = keys(&["oakst", "mainst", "pineave"]);
        let drivers = keys(&["jon", "amywu"]);
        let matrix = ScoreMatrix::build(&destinations, &drivers);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 2);
    }

    #[test]
    fn matrix_cells_hold_pairwise_scores() {
        let destinations = keys(&["mainst"]);
        let drivers = keys(&["jon"]);
        let matrix = ScoreMatrix::build(&destinations, &drivers);
        assert_eq!(matrix.at(0, 0), suitability_score("mainst", "jon"));
    }

    #[test]
    fn empty_key_lists_build_empty_matrices() {
        let matrix = ScoreMatrix::build(&[], &keys(&["jon"]));
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.columns(), 0);
    }
}
