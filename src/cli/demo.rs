use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use argodash::store::{write_bundle, BundleMetadata, InMemoryStore};

/// Write the built-in demo dataset as a bundle directory.
pub fn run(output: PathBuf) -> Result<()> {
    info!("ArgoDash Demo Dataset Generator");
    info!("===============================");

    let store = InMemoryStore::demo();
    let metadata = BundleMetadata::for_store(&store).with_source("argodash demo generator");

    write_bundle(&output, &store, &metadata)
        .with_context(|| format!("Failed to write demo bundle to {}", output.display()))?;

    info!("Demo bundle written to {}", output.display());
    info!("  Trajectory records: {}", store.trajectories().len());
    info!("  Profile samples: {}", store.profiles().len());
    info!("  Comparison rows: {}", store.comparison().len());

    info!("\nExplore it with:");
    info!("  argodash info {}", output.display());
    info!(
        "  argodash render {} --view depth-time --date 2024-01-01",
        output.display()
    );

    Ok(())
}
