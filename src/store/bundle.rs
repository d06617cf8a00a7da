//! CSV dataset bundles: the on-disk backing for the measurement store.
//!
//! A bundle is a directory holding one CSV file per record collection plus a
//! small human-readable metadata file:
//!
//! ```text
//! pacific_2024.argodash/
//! ├── trajectories.csv   # FloatRecord rows
//! ├── profiles.csv       # ProfileSample rows
//! ├── comparison.csv     # ComparisonSample rows
//! └── metadata.json      # format version, generation timestamp, provenance
//! ```
//!
//! Loading goes through [`StoreBuilder`](super::StoreBuilder), so a bundle is
//! held to the same invariants as any other store: non-negative depths,
//! unique profile depths per reference date, unique comparison depth bins.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::memory::InMemoryStore;
use super::types::{ComparisonSample, FloatRecord, ProfileSample};

/// Bundle format version - follows semantic versioning
pub const BUNDLE_FORMAT_VERSION: &str = "1.0.0";

/// File name of the trajectory observation table inside a bundle
pub const TRAJECTORIES_FILE: &str = "trajectories.csv";

/// File name of the vertical-profile sample table inside a bundle
pub const PROFILES_FILE: &str = "profiles.csv";

/// File name of the pre-aligned comparison table inside a bundle
pub const COMPARISON_FILE: &str = "comparison.csv";

/// File name of the human-readable bundle metadata
pub const METADATA_FILE: &str = "metadata.json";

/// Human-readable provenance stored alongside the record files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Bundle format version (semantic versioning)
    pub format_version: String,
    /// RFC 3339 timestamp of when the bundle was written
    pub generated_at: Option<String>,
    /// Free-form description of where the records came from
    pub source: Option<String>,
    /// Number of trajectory observations in the bundle
    pub trajectory_count: usize,
    /// Number of vertical-profile samples in the bundle
    pub profile_count: usize,
    /// Number of comparison rows in the bundle
    pub comparison_count: usize,
}

impl BundleMetadata {
    /// Metadata describing `store`, stamped with the current time.
    pub fn for_store(store: &InMemoryStore) -> Self {
        Self {
            format_version: BUNDLE_FORMAT_VERSION.to_string(),
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            source: None,
            trajectory_count: store.trajectories().len(),
            profile_count: store.profiles().len(),
            comparison_count: store.comparison().len(),
        }
    }

    /// Attach a provenance description.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Load a dataset bundle directory into an in-memory store.
///
/// All three record files must be present. `metadata.json` is optional; a
/// missing file or an unexpected format version is logged, not fatal, since
/// the record files alone fully determine the store.
pub fn load_bundle(dir: &Path) -> Result<InMemoryStore, StoreError> {
    if !dir.is_dir() {
        return Err(StoreError::InvalidBundle(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    for file in [TRAJECTORIES_FILE, PROFILES_FILE, COMPARISON_FILE] {
        if !dir.join(file).is_file() {
            return Err(StoreError::InvalidBundle(format!(
                "missing {} in {}",
                file,
                dir.display()
            )));
        }
    }

    match read_metadata(dir)? {
        Some(metadata) => {
            if metadata.format_version != BUNDLE_FORMAT_VERSION {
                warn!(
                    "Bundle {} has format version {} (reader supports {})",
                    dir.display(),
                    metadata.format_version,
                    BUNDLE_FORMAT_VERSION
                );
            }
        }
        None => debug!("Bundle {} has no {}", dir.display(), METADATA_FILE),
    }

    let trajectories: Vec<FloatRecord> = read_records(&dir.join(TRAJECTORIES_FILE))?;
    let profiles: Vec<ProfileSample> = read_records(&dir.join(PROFILES_FILE))?;
    let comparison: Vec<ComparisonSample> = read_records(&dir.join(COMPARISON_FILE))?;

    debug!(
        "Loaded bundle {}: {} trajectory records, {} profile samples, {} comparison rows",
        dir.display(),
        trajectories.len(),
        profiles.len(),
        comparison.len()
    );

    InMemoryStore::builder()
        .trajectories(trajectories)
        .profile_samples(profiles)
        .comparison_rows(comparison)
        .build()
}

/// Write a store out as a dataset bundle directory.
///
/// Refuses to overwrite: the target directory must not already exist.
pub fn write_bundle(
    dir: &Path,
    store: &InMemoryStore,
    metadata: &BundleMetadata,
) -> Result<(), StoreError> {
    if dir.exists() {
        return Err(StoreError::AlreadyExists(dir.display().to_string()));
    }
    fs::create_dir_all(dir)?;

    write_records(&dir.join(TRAJECTORIES_FILE), store.trajectories())?;
    write_records(&dir.join(PROFILES_FILE), store.profiles())?;
    write_records(&dir.join(COMPARISON_FILE), store.comparison())?;

    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(dir.join(METADATA_FILE), json)?;

    debug!(
        "Wrote bundle {}: {} trajectory records, {} profile samples, {} comparison rows",
        dir.display(),
        store.trajectories().len(),
        store.profiles().len(),
        store.comparison().len()
    );

    Ok(())
}

fn read_metadata(dir: &Path) -> Result<Option<BundleMetadata>, StoreError> {
    let path = dir.join(METADATA_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
