//! Shipment dispatch core: assign delivery destinations to drivers by
//! suitability score.
//!
//! The pipeline normalizes raw labels into match keys, scores every
//! destination/driver pair, runs a greedy assignment over the score matrix,
//! and resolves the committed pairs back to their original labels.
//!
//! # Quick Start
//!
//! ```
//! use dispatch_core::matching::{AssignmentAlgorithm, GreedyAssignment};
//! use dispatch_core::normalize::{parse_destinations, parse_drivers};
//! use dispatch_core::report::resolve_assignments;
//!
//! let addresses = vec!["44 Fake Dr".to_string(), "123 Oak St".to_string()];
//! let names = vec!["Daniel Davidson".to_string(), "Amy Wu".to_string()];
//!
//! let (destinations, destination_lookup) = parse_destinations(&addresses);
//! let (drivers, driver_lookup) = parse_drivers(&names);
//!
//! let outcome = GreedyAssignment.assign(&destinations, &drivers);
//! let records =
//!     resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
//! assert_eq!(records.len(), outcome.assignments.len());
//! ```

pub mod generate;
pub mod matching;
pub mod normalize;
pub mod report;
pub mod scoring;

pub use matching::{AssignmentAlgorithm, AssignmentOutcome, GreedyAssignment, ScoreMatrix};
pub use report::{resolve_assignments, AssignmentRecord, ReportError};
