//! Resolve committed assignments back to their original labels.

use std::collections::HashMap;

use serde::Serialize;

use crate::matching::AssignmentOutcome;

/// One resolved assignment, carrying the original input labels rather than
/// the normalized keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub destination: String,
    pub driver: String,
}

/// Errors encountered while resolving assignment keys.
///
/// A missing key means the assignment contains a key that the normalizer
/// never produced in this run. That is a broken invariant, not a recoverable
/// condition; callers should treat it as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    UnknownDestinationKey(String),
    UnknownDriverKey(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::UnknownDestinationKey(key) => {
                write!(f, "destination key {key:?} has no original label")
            }
            ReportError::UnknownDriverKey(key) => {
                write!(f, "driver key {key:?} has no original label")
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Map each committed (destination key, driver key) pair to its original
/// labels, in assignment order.
pub fn resolve_assignments(
    outcome: &AssignmentOutcome,
    destination_lookup: &HashMap<String, String>,
    driver_lookup: &HashMap<String, String>,
) -> Result<Vec<AssignmentRecord>, ReportError> {
    outcome
        .assignments
        .iter()
        .map(|(destination_key, driver_key)| {
            let destination = destination_lookup
                .get(destination_key)
                .ok_or_else(|| ReportError::UnknownDestinationKey(destination_key.clone()))?;
            let driver = driver_lookup
                .get(driver_key)
                .ok_or_else(|| ReportError::UnknownDriverKey(driver_key.clone()))?;
            Ok(AssignmentRecord {
                destination: destination.clone(),
                driver: driver.clone(),
            })
        })
        .collect()
}
