//! End-to-end pipeline tests: raw labels through normalization, greedy
//! assignment, and label resolution.

use dispatch_core::matching::{AssignmentAlgorithm, GreedyAssignment};
use dispatch_core::normalize::{parse_destinations, parse_drivers};
use dispatch_core::report::resolve_assignments;
use dispatch_core::scoring::suitability_score;

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn pipeline_assigns_and_resolves_original_labels() {
    let addresses = labels(&["123 Oak St", "8 Mission Blvd", "77 Pine Ave"]);
    let names = labels(&["Jon Smith", "Amy Wu"]);

    let (destinations, destination_lookup) = parse_destinations(&addresses);
    let (drivers, driver_lookup) = parse_drivers(&names);
    assert_eq!(destinations.len(), 3);
    assert_eq!(drivers.len(), 2);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    assert!(outcome.assignments.len() <= 2);
    assert!(outcome.total_score > 0.0);

    let records =
        resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
    assert_eq!(records.len(), outcome.assignments.len());
    for record in &records {
        assert!(addresses.contains(&record.destination));
        assert!(names.contains(&record.driver));
    }
}

#[test]
fn dropped_destination_labels_never_reach_the_output() {
    let addresses = labels(&["NoNumber", "123 Oak St"]);
    let names = labels(&["Jon Smith"]);

    let (destinations, destination_lookup) = parse_destinations(&addresses);
    let (drivers, driver_lookup) = parse_drivers(&names);
    assert_eq!(destinations, vec!["oakst".to_string()]);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    let records =
        resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
    assert!(records.iter().all(|r| r.destination != "NoNumber"));
}

#[test]
fn colliding_labels_resolve_to_the_most_recent_input() {
    // "123 Oak St" and "456 OAK ST" share the key "oakst"; the report must
    // show the later label for whichever pair uses that key.
    let addresses = labels(&["123 Oak St", "456 OAK ST"]);
    let names = labels(&["Jon Smith", "Amy Wu"]);

    let (destinations, destination_lookup) = parse_destinations(&addresses);
    let (drivers, driver_lookup) = parse_drivers(&names);
    assert_eq!(destinations.len(), 2);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    let records =
        resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
    for record in &records {
        assert_eq!(record.destination, "456 OAK ST");
    }
}

#[test]
fn total_score_matches_independent_recomputation() {
    let addresses = labels(&["123 Oak St", "9 Elm Rd", "42 Lake Dr", "7 Hill Ct"]);
    let names = labels(&["Jon Smith", "Amy Wu", "Bo Lee"]);

    let (destinations, _) = parse_destinations(&addresses);
    let (drivers, _) = parse_drivers(&names);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    let recomputed: f64 = outcome
        .assignments
        .iter()
        .map(|(destination, driver)| suitability_score(destination, driver))
        .sum();
    assert_eq!(outcome.total_score, recomputed);
}

#[test]
fn pipeline_is_deterministic_end_to_end() {
    let addresses = labels(&["123 Oak St", "9 Elm Rd", "42 Lake Dr"]);
    let names = labels(&["Jon Smith", "Amy Wu", "Bo Lee"]);

    let run = || {
        let (destinations, destination_lookup) = parse_destinations(&addresses);
        let (drivers, driver_lookup) = parse_drivers(&names);
        let outcome = GreedyAssignment.assign(&destinations, &drivers);
        let records =
            resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
        (outcome, records)
    };

    let (first_outcome, first_records) = run();
    let (second_outcome, second_records) = run();
    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first_records, second_records);
}

#[test]
fn empty_inputs_produce_an_empty_report() {
    let (destinations, destination_lookup) = parse_destinations(&[]);
    let (drivers, driver_lookup) = parse_drivers(&[]);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.total_score, 0.0);

    let records =
        resolve_assignments(&outcome, &destination_lookup, &driver_lookup).unwrap();
    assert!(records.is_empty());
}
