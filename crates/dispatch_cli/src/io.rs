//! File boundaries: newline-separated label files in, assignments CSV out.

use std::fs;
use std::io::Write;
use std::path::Path;

use dispatch_core::report::AssignmentRecord;

/// Read one label per line. Interior blank lines become empty labels; the
/// normalizer decides what to do with them.
pub fn read_labels(path: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Write one label per line, no header.
pub fn write_labels(path: impl AsRef<Path>, labels: &[String]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    for label in labels {
        writeln!(file, "{label}")?;
    }
    Ok(())
}

/// Write the assignments CSV: a `destination,driver` header row followed by
/// one record per committed pair, in assignment order.
pub fn write_assignments(
    path: impl AsRef<Path>,
    records: &[AssignmentRecord],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    if records.is_empty() {
        // Serialization derives the header from the first record; with no
        // records the header row still has to appear.
        wtr.write_record(["destination", "driver"])?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
