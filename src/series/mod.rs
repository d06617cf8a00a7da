//! # Chart Adapters
//!
//! Reshape filtered measurement records into the declarative [`Series`]
//! format the rendering surface consumes. One adapter per view kind:
//!
//! - **Trajectory listing**: one single-point series per observation, carrying
//!   the observation date as its label and the depth/temperature readout as a
//!   point caption.
//! - **Depth-time profile**: two series (Temperature, Salinity) with depth on
//!   an inverted y axis.
//! - **Comparison**: four series (primary/secondary temperature and salinity)
//!   sharing pairwise-identical depth coordinates; secondary series are
//!   dashed.
//!
//! Adapters are pure. They pass measurement values through unchanged (range
//! validation, if any, belongs to the store) and rebuild their output
//! wholesale on every call; a `Series` is never mutated after creation. An
//! empty filtered input produces an empty series set, which the rendering
//! surface shows as a placeholder chart area.

mod config;

#[cfg(test)]
mod tests;

pub use config::{spec, SeriesSpec, PRIMARY_FLOAT_ID, SECONDARY_FLOAT_ID};

use serde::Serialize;

use crate::store::{ComparisonSample, FloatRecord, ProfileSample};

/// Stable identity of a series within its view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesKey {
    /// A single trajectory observation's surface position
    Position,
    /// Depth-time temperature profile
    Temperature,
    /// Depth-time salinity profile
    Salinity,
    /// Comparison: primary float temperature
    PrimaryTemperature,
    /// Comparison: secondary float temperature
    SecondaryTemperature,
    /// Comparison: primary float salinity
    PrimarySalinity,
    /// Comparison: secondary float salinity
    SecondarySalinity,
}

/// Stroke hint for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineStyle {
    /// Continuous stroke
    Solid,
    /// Dashed stroke, used to distinguish secondary comparison series
    Dashed,
}

/// One (x, y) pair in a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Measurement value (or longitude, for position points)
    pub x: f64,
    /// Depth in meters (or latitude, for position points)
    pub y: f64,
    /// Short readout the rendering surface shows beside the point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl SeriesPoint {
    /// A plain point with no caption.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            caption: None,
        }
    }
}

/// A declarative series ready for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Which series this is within its view
    pub key: SeriesKey,
    /// Display label (legend entry, or listing heading for positions)
    pub label: String,
    /// Measurement unit of the x values
    pub unit: String,
    /// Stroke hint
    pub style: LineStyle,
    /// Whether the y axis is drawn inverted (depth grows downward)
    pub invert_y: bool,
    /// Ordered points; ordering is established by the view filters
    pub points: Vec<SeriesPoint>,
}

impl Series {
    fn from_spec(key: SeriesKey, points: Vec<SeriesPoint>) -> Self {
        let spec = config::spec(key);
        Self {
            key,
            label: spec.label.to_string(),
            unit: spec.unit.to_string(),
            style: spec.style,
            invert_y: spec.invert_y,
            points,
        }
    }

    /// Number of points in the series.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Trajectory listing: one series per observation.
///
/// Label carries the observation date, x/y carry longitude/latitude, and the
/// caption carries the depth and temperature readout, so every field of the
/// observation reaches the rendering surface. Entries are listed, not drawn
/// as a continuous line; no interpolation happens here.
pub fn trajectory_series(records: &[FloatRecord]) -> Vec<Series> {
    records
        .iter()
        .map(|record| {
            let point = SeriesPoint {
                x: record.longitude,
                y: record.latitude,
                caption: Some(format!(
                    "{:.0} m · {:.1} °C",
                    record.depth_m, record.temperature_c
                )),
            };
            let mut series = Series::from_spec(SeriesKey::Position, vec![point]);
            series.label = record.timestamp.to_string();
            series
        })
        .collect()
}

/// Depth-time profile: Temperature and Salinity series over one reference
/// date's samples.
///
/// x is the measurement, y is depth; the inverted y axis is a rendering-axis
/// concern, so point ordering still follows ascending depth from the filter
/// stage.
pub fn depth_profile_series(samples: &[ProfileSample]) -> Vec<Series> {
    if samples.is_empty() {
        return Vec::new();
    }

    let temperature = samples
        .iter()
        .map(|s| SeriesPoint::new(s.temperature_c, s.depth_m))
        .collect();
    let salinity = samples
        .iter()
        .map(|s| SeriesPoint::new(s.salinity_psu, s.depth_m))
        .collect();

    vec![
        Series::from_spec(SeriesKey::Temperature, temperature),
        Series::from_spec(SeriesKey::Salinity, salinity),
    ]
}

/// Comparison: four series over the pre-aligned table.
///
/// Primary and secondary series for the same property share identical depth
/// coordinates pairwise; secondary series differ only in stroke style.
pub fn comparison_series(rows: &[ComparisonSample]) -> Vec<Series> {
    if rows.is_empty() {
        return Vec::new();
    }

    let column = |value: fn(&ComparisonSample) -> f64| -> Vec<SeriesPoint> {
        rows.iter()
            .map(|row| SeriesPoint::new(value(row), row.depth_m))
            .collect()
    };

    vec![
        Series::from_spec(
            SeriesKey::PrimaryTemperature,
            column(|r| r.primary_temperature_c),
        ),
        Series::from_spec(
            SeriesKey::SecondaryTemperature,
            column(|r| r.secondary_temperature_c),
        ),
        Series::from_spec(
            SeriesKey::PrimarySalinity,
            column(|r| r.primary_salinity_psu),
        ),
        Series::from_spec(
            SeriesKey::SecondarySalinity,
            column(|r| r.secondary_salinity_psu),
        ),
    ]
}
