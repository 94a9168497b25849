//! Dispatch CLI: generate synthetic inputs and assign delivery destinations
//! to drivers by suitability score.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dispatch_core::generate::generate_labels;
use dispatch_core::matching::{AssignmentAlgorithm, GreedyAssignment};
use dispatch_core::normalize::{parse_destinations, parse_drivers};
use dispatch_core::report::resolve_assignments;

mod io;

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Assign delivery destinations to drivers by suitability score"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic address and driver name input files
    Generate {
        /// Maximum number of addresses (between 75% and 100% are generated)
        #[arg(long, default_value_t = 20)]
        max_addresses: usize,
        /// Maximum number of driver names (between 75% and 100% are generated)
        #[arg(long, default_value_t = 20)]
        max_drivers: usize,
        /// Random seed for reproducible data
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Directory to write addresses.csv and drivers.csv into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Assign destinations to drivers from existing input files
    Assign {
        /// Destination addresses, one label per line
        #[arg(long, default_value = "addresses.csv")]
        addresses: PathBuf,
        /// Driver names, one label per line
        #[arg(long, default_value = "drivers.csv")]
        drivers: PathBuf,
        /// Output CSV of resolved assignments
        #[arg(long, default_value = "assignments.csv")]
        output: PathBuf,
    },
    /// Generate inputs and run the assignment in one invocation
    Run {
        /// Maximum number of addresses (between 75% and 100% are generated)
        #[arg(long, default_value_t = 20)]
        max_addresses: usize,
        /// Maximum number of driver names (between 75% and 100% are generated)
        #[arg(long, default_value_t = 20)]
        max_drivers: usize,
        /// Random seed for reproducible data
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Directory for input and output files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            max_addresses,
            max_drivers,
            seed,
            out_dir,
        } => {
            generate_inputs(max_addresses, max_drivers, seed, &out_dir)?;
        }
        Commands::Assign {
            addresses,
            drivers,
            output,
        } => {
            let address_labels = io::read_labels(&addresses)?;
            let driver_labels = io::read_labels(&drivers)?;
            run_assignment(&address_labels, &driver_labels, &output)?;
        }
        Commands::Run {
            max_addresses,
            max_drivers,
            seed,
            out_dir,
        } => {
            let (addresses, drivers) = generate_inputs(max_addresses, max_drivers, seed, &out_dir)?;
            let address_labels = io::read_labels(&addresses)?;
            let driver_labels = io::read_labels(&drivers)?;
            run_assignment(&address_labels, &driver_labels, &out_dir.join("assignments.csv"))?;
        }
    }

    Ok(())
}

/// Write synthetic input files and return their paths.
fn generate_inputs(
    max_addresses: usize,
    max_drivers: usize,
    seed: u64,
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    let labels = generate_labels(max_addresses, max_drivers, seed);

    let addresses_path = out_dir.join("addresses.csv");
    let drivers_path = out_dir.join("drivers.csv");
    io::write_labels(&addresses_path, &labels.addresses)?;
    io::write_labels(&drivers_path, &labels.drivers)?;

    println!(
        "Wrote {} addresses to {}",
        labels.addresses.len(),
        addresses_path.display()
    );
    println!(
        "Wrote {} driver names to {}",
        labels.drivers.len(),
        drivers_path.display()
    );

    Ok((addresses_path, drivers_path))
}

/// Run the full pipeline over raw labels: normalize, assign greedily,
/// resolve back to original labels, write the CSV, print the summary.
fn run_assignment(
    address_labels: &[String],
    driver_labels: &[String],
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let (destinations, destination_lookup) = parse_destinations(address_labels);
    let (drivers, driver_lookup) = parse_drivers(driver_labels);

    let outcome = GreedyAssignment.assign(&destinations, &drivers);
    let records = resolve_assignments(&outcome, &destination_lookup, &driver_lookup)?;
    io::write_assignments(output, &records)?;

    println!("Total suitability score: {}", outcome.total_score);
    println!("Assignments:");
    for record in &records {
        println!("{} -> {}", record.destination, record.driver);
    }
    println!("Wrote {} assignments to {}", records.len(), output.display());

    Ok(())
}
