use super::*;
use crate::filter;
use crate::store::{FloatId, InMemoryStore};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn trajectory_adapter_emits_one_series_per_record() {
    let store = InMemoryStore::demo();
    let records = filter::trajectories(&store, &FloatId::new("2903123"));
    let series = trajectory_series(&records);

    assert_eq!(series.len(), 5);
    for (entry, record) in series.iter().zip(&records) {
        assert_eq!(entry.key, SeriesKey::Position);
        assert_eq!(entry.label, record.timestamp.to_string());
        assert!(!entry.invert_y);
        assert_eq!(entry.point_count(), 1);
        assert_eq!(entry.points[0].x, record.longitude);
        assert_eq!(entry.points[0].y, record.latitude);
    }

    // Depth and temperature survive into the listing caption.
    let caption = series[0].points[0].caption.as_deref().unwrap();
    assert_eq!(caption, "0 m · 18.5 °C");
}

#[test]
fn depth_profile_adapter_emits_temperature_and_salinity() {
    let store = InMemoryStore::demo();
    let samples = filter::depth_profile(&store, date(2024, 1, 1));
    let series = depth_profile_series(&samples);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].key, SeriesKey::Temperature);
    assert_eq!(series[0].label, "Temperature");
    assert_eq!(series[0].unit, "°C");
    assert_eq!(series[1].key, SeriesKey::Salinity);
    assert_eq!(series[1].label, "Salinity");
    assert_eq!(series[1].unit, "PSU");

    for entry in &series {
        assert!(entry.invert_y);
        assert_eq!(entry.style, LineStyle::Solid);
        assert_eq!(entry.point_count(), 7);
        // Point ordering follows ascending depth; inversion stays an axis hint.
        for pair in entry.points.windows(2) {
            assert!(pair[0].y < pair[1].y);
        }
    }

    // Values pass through unchanged.
    assert_eq!(series[0].points[0].x, 18.5);
    assert_eq!(series[1].points[6].x, 34.6);
}

#[test]
fn comparison_adapter_emits_four_pairwise_aligned_series() {
    let store = InMemoryStore::demo();
    let rows = filter::comparison(&store);
    let series = comparison_series(&rows);

    assert_eq!(series.len(), 4);
    assert_eq!(
        series.iter().map(|s| s.key).collect::<Vec<_>>(),
        vec![
            SeriesKey::PrimaryTemperature,
            SeriesKey::SecondaryTemperature,
            SeriesKey::PrimarySalinity,
            SeriesKey::SecondarySalinity,
        ]
    );

    for entry in &series {
        assert!(entry.invert_y);
        assert_eq!(entry.point_count(), 7);
    }

    // Primary and secondary series for the same property share depth
    // coordinates pairwise.
    for (primary, secondary) in [(0usize, 1usize), (2, 3)] {
        let depths_primary: Vec<f64> = series[primary].points.iter().map(|p| p.y).collect();
        let depths_secondary: Vec<f64> = series[secondary].points.iter().map(|p| p.y).collect();
        assert_eq!(depths_primary, depths_secondary);
    }

    assert_eq!(series[0].style, LineStyle::Solid);
    assert_eq!(series[1].style, LineStyle::Dashed);
    assert_eq!(series[3].style, LineStyle::Dashed);
}

#[test]
fn empty_input_produces_empty_series_set() {
    assert!(trajectory_series(&[]).is_empty());
    assert!(depth_profile_series(&[]).is_empty());
    assert!(comparison_series(&[]).is_empty());
}

#[test]
fn comparison_labels_name_the_fixed_pair() {
    let primary = spec(SeriesKey::PrimaryTemperature);
    let secondary = spec(SeriesKey::SecondarySalinity);

    assert!(primary.label.contains(PRIMARY_FLOAT_ID));
    assert!(secondary.label.contains(SECONDARY_FLOAT_ID));
}

#[test]
fn series_serializes_for_the_rendering_surface() {
    let store = InMemoryStore::demo();
    let series = depth_profile_series(&filter::depth_profile(&store, date(2024, 1, 1)));

    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json[0]["key"], "temperature");
    assert_eq!(json[0]["invert_y"], true);
    assert_eq!(json[1]["style"], "solid");
}
