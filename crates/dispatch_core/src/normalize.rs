//! Label normalization: raw addresses and driver names become match keys.
//!
//! Keys are lowercase with spaces removed. Destination labels additionally
//! drop everything up to and including the leading house-number digit run.
//! Each parse builds a reverse lookup from key back to the originating
//! label so reports can show the raw input again.

use std::collections::HashMap;

/// Normalize a driver name into a match key: spaces removed, lowercased.
///
/// Every input yields a key; the empty string is a legal key.
pub fn normalize_driver(label: &str) -> String {
    label.replace(' ', "").to_lowercase()
}

/// Normalize a destination address into a match key.
///
/// The key is everything after the first maximal run of ASCII digits
/// (typically the house number), with spaces removed and lowercased.
/// Returns `None` for labels with no digit run, and for labels where the
/// remainder after the run has no whitespace followed by another character
/// (e.g. a bare number, or a number glued to a single token). Such labels
/// are dropped from matching entirely.
pub fn normalize_destination(label: &str) -> Option<String> {
    let tail = digit_run_tail(label)?;
    if !has_street_shape(tail) {
        return None;
    }
    Some(tail.replace(' ', "").to_lowercase())
}

/// Everything after the first maximal ASCII digit run, or `None` if the
/// label contains no digit.
fn digit_run_tail(label: &str) -> Option<&str> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let rest = &label[start..];
    let run_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[run_len..])
}

/// A usable address tail contains a whitespace character with at least one
/// character after it (separator plus street name).
fn has_street_shape(tail: &str) -> bool {
    let mut after_whitespace = false;
    for c in tail.chars() {
        if after_whitespace {
            return true;
        }
        if c.is_whitespace() {
            after_whitespace = true;
        }
    }
    false
}

/// Parse destination labels into an ordered key list plus a key → label
/// reverse lookup.
///
/// Labels that fail normalization are silently skipped: they contribute no
/// key and no lookup entry. When two labels collide on a key, the lookup
/// keeps the most recently inserted label; the key list keeps both
/// occurrences in input order.
pub fn parse_destinations(labels: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut keys = Vec::new();
    let mut lookup = HashMap::new();
    for label in labels {
        if let Some(key) = normalize_destination(label) {
            lookup.insert(key.clone(), label.clone());
            keys.push(key);
        }
    }
    (keys, lookup)
}

/// Parse driver name labels into an ordered key list plus a key → label
/// reverse lookup. Same collision rule as [`parse_destinations`]; every
/// label yields a key.
pub fn parse_drivers(labels: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut keys = Vec::new();
    let mut lookup = HashMap::new();
    for label in labels {
        let key = normalize_driver(label);
        lookup.insert(key.clone(), label.clone());
        keys.push(key);
    }
    (keys, lookup)
}
