use chrono::NaiveDate;

/// Errors that can occur while building or loading a measurement store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error during bundle file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error in a bundle record file
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON error in bundle metadata
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Directory is not a readable dataset bundle
    #[error("Invalid dataset bundle: {0}")]
    InvalidBundle(String),

    /// Bundle already exists at the target location
    #[error("Dataset bundle already exists: {0}")]
    AlreadyExists(String),

    /// Record carries a negative or non-finite depth
    #[error("Invalid depth {depth_m} m in {context}")]
    InvalidDepth {
        /// Offending depth value
        depth_m: f64,
        /// Which record collection the value came from
        context: &'static str,
    },

    /// Two profile samples share a depth within one reference date
    #[error("Duplicate profile depth {depth_m} m for {reference_date}")]
    DuplicateProfileDepth {
        /// Reference date of the colliding samples
        reference_date: NaiveDate,
        /// Colliding depth value
        depth_m: f64,
    },

    /// Two comparison rows share a depth bin
    #[error("Duplicate comparison depth {0} m")]
    DuplicateComparisonDepth(f64),
}
