use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an autonomous profiling float (WMO-style numeric string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloatId(String);

impl FloatId {
    /// Create a float identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    ///
    /// An empty id is valid input everywhere; it simply matches no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FloatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FloatId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FloatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One trajectory observation: where a float surfaced and what it measured.
///
/// Immutable once produced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRecord {
    /// Float that produced the observation
    pub float_id: FloatId,
    /// Observation date
    pub timestamp: NaiveDate,
    /// Surface latitude in decimal degrees
    pub latitude: f64,
    /// Surface longitude in decimal degrees
    pub longitude: f64,
    /// Measurement depth in meters (non-negative)
    pub depth_m: f64,
    /// Water temperature in degrees Celsius
    pub temperature_c: f64,
}

/// One vertical-profile reading at a fixed reference date.
///
/// Within one `reference_date` the store guarantees depths are unique and the
/// collection is depth-ordered ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    /// Date the profile was taken
    pub reference_date: NaiveDate,
    /// Sample depth in meters (non-negative)
    pub depth_m: f64,
    /// Water temperature in degrees Celsius
    pub temperature_c: f64,
    /// Salinity in PSU
    pub salinity_psu: f64,
}

/// Two floats' readings paired at a matching depth bin.
///
/// The store pre-aligns the table: depth values are unique and identical for
/// both floats of the fixed comparison pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSample {
    /// Shared depth bin in meters (non-negative)
    pub depth_m: f64,
    /// Primary float temperature in degrees Celsius
    pub primary_temperature_c: f64,
    /// Secondary float temperature in degrees Celsius
    pub secondary_temperature_c: f64,
    /// Primary float salinity in PSU
    pub primary_salinity_psu: f64,
    /// Secondary float salinity in PSU
    pub secondary_salinity_psu: f64,
}
