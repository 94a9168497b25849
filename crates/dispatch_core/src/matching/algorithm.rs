use super::types::AssignmentOutcome;

/// Trait for algorithms that assign destinations to drivers.
///
/// Implementations consume the ordered, normalized key lists and return the
/// committed pairs plus the realized total suitability score. Key order
/// defines the matrix index spaces and must stay stable for one run.
pub trait AssignmentAlgorithm: Send + Sync {
    /// Assign destinations to drivers, one-to-one, at most
    /// `min(destinations, drivers)` pairs.
    fn assign(&self, destination_keys: &[String], driver_keys: &[String]) -> AssignmentOutcome;
}
