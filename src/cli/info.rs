use anyhow::{Context, Result};
use std::path::PathBuf;

use argodash::store::{load_bundle, MeasurementStore, StoreSummary};

/// Display information about a dataset bundle.
pub fn run(bundle: PathBuf) -> Result<()> {
    let store = load_bundle(&bundle)
        .with_context(|| format!("Failed to load bundle {}", bundle.display()))?;

    let summary = StoreSummary::from_store(&store);
    println!("{}", summary);

    println!("Floats:");
    for float_id in store.list_floats() {
        println!("  {}", float_id);
    }

    println!("Profile dates:");
    for date in store.list_reference_dates() {
        println!("  {}", date);
    }

    Ok(())
}
