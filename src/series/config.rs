//! Static per-view chart configuration.
//!
//! Labels, units, and display hints never change across selections, so they
//! live here as data instead of inline literals at each adapter call site.

use super::{LineStyle, SeriesKey};

/// Primary float of the fixed comparison pair.
pub const PRIMARY_FLOAT_ID: &str = "2903123";

/// Secondary float of the fixed comparison pair.
pub const SECONDARY_FLOAT_ID: &str = "2903124";

/// Display configuration for one series key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    /// Display label shown in legends and listings
    pub label: &'static str,
    /// Measurement unit of the x values
    pub unit: &'static str,
    /// Stroke hint for the rendering surface
    pub style: LineStyle,
    /// Whether the y axis is drawn inverted (depth grows downward)
    pub invert_y: bool,
}

const POSITION: SeriesSpec = SeriesSpec {
    label: "Position",
    unit: "°",
    style: LineStyle::Solid,
    invert_y: false,
};

const TEMPERATURE: SeriesSpec = SeriesSpec {
    label: "Temperature",
    unit: "°C",
    style: LineStyle::Solid,
    invert_y: true,
};

const SALINITY: SeriesSpec = SeriesSpec {
    label: "Salinity",
    unit: "PSU",
    style: LineStyle::Solid,
    invert_y: true,
};

const PRIMARY_TEMPERATURE: SeriesSpec = SeriesSpec {
    label: "Float 2903123",
    unit: "°C",
    style: LineStyle::Solid,
    invert_y: true,
};

const SECONDARY_TEMPERATURE: SeriesSpec = SeriesSpec {
    label: "Float 2903124",
    unit: "°C",
    style: LineStyle::Dashed,
    invert_y: true,
};

const PRIMARY_SALINITY: SeriesSpec = SeriesSpec {
    label: "Float 2903123",
    unit: "PSU",
    style: LineStyle::Solid,
    invert_y: true,
};

const SECONDARY_SALINITY: SeriesSpec = SeriesSpec {
    label: "Float 2903124",
    unit: "PSU",
    style: LineStyle::Dashed,
    invert_y: true,
};

/// Display configuration for a series key.
pub fn spec(key: SeriesKey) -> &'static SeriesSpec {
    match key {
        SeriesKey::Position => &POSITION,
        SeriesKey::Temperature => &TEMPERATURE,
        SeriesKey::Salinity => &SALINITY,
        SeriesKey::PrimaryTemperature => &PRIMARY_TEMPERATURE,
        SeriesKey::SecondaryTemperature => &SECONDARY_TEMPERATURE,
        SeriesKey::PrimarySalinity => &PRIMARY_SALINITY,
        SeriesKey::SecondarySalinity => &SECONDARY_SALINITY,
    }
}
