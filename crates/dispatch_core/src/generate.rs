//! Synthetic label generation for demo and test data sets.
//!
//! Counts and content are drawn from a seeded RNG so runs are reproducible;
//! the seed is always passed in explicitly rather than taken from ambient
//! process state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STREET_NAMES: &[&str] = &[
    "Oak", "Main", "Pine", "Elm", "Maple", "Cedar", "Washington", "Lake", "Hill", "Park",
    "River", "Sunset", "Highland", "Franklin", "Jefferson", "Madison", "Walnut", "Chestnut",
    "Spring", "Meadow",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Way"];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Daniel", "Karen",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin",
];

/// Synthetic destination addresses and driver names for one run.
#[derive(Debug, Clone)]
pub struct GeneratedLabels {
    pub addresses: Vec<String>,
    pub drivers: Vec<String>,
}

/// Generate synthetic destination addresses and driver names.
///
/// The realized count for each side is drawn uniformly from
/// `[ceil(0.75 × max), max]` inclusive, so callers get between 75% and 100%
/// of what they asked for. Deterministic for a given seed.
pub fn generate_labels(max_addresses: usize, max_drivers: usize, seed: u64) -> GeneratedLabels {
    let mut rng = StdRng::seed_from_u64(seed);

    let address_count = sample_count(&mut rng, max_addresses);
    let driver_count = sample_count(&mut rng, max_drivers);

    let addresses = (0..address_count).map(|_| random_address(&mut rng)).collect();
    let drivers = (0..driver_count).map(|_| random_name(&mut rng)).collect();

    GeneratedLabels { addresses, drivers }
}

/// Uniform draw in `[ceil(0.75 × max), max]`.
fn sample_count(rng: &mut StdRng, max: usize) -> usize {
    let lower = (max as f64 * 0.75).ceil() as usize;
    rng.gen_range(lower..=max)
}

fn random_address(rng: &mut StdRng) -> String {
    let number = rng.gen_range(1..=9999);
    let street = STREET_NAMES[rng.gen_range(0..STREET_NAMES.len())];
    let suffix = STREET_SUFFIXES[rng.gen_range(0..STREET_SUFFIXES.len())];
    format!("{number} {street} {suffix}")
}

fn random_name(rng: &mut StdRng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}
