use super::*;
use crate::selection::InvalidSelection;
use crate::series::SeriesKey;
use crate::store::InMemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn defaults_to_first_float_and_date() {
    let dashboard = DashboardController::new(InMemoryStore::demo());

    let selection = dashboard.selection();
    assert_eq!(selection.active_view, ViewKind::Trajectories);
    assert_eq!(selection.float_id, FloatId::new("2903123"));
    assert_eq!(selection.reference_date, date(2024, 1, 1));

    let payload = dashboard.published();
    assert_eq!(payload.view, ViewKind::Trajectories);
    assert_eq!(payload.series.len(), 5);
}

#[test]
fn comparison_view_publishes_four_series() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());

    let payload = dashboard.set_active_view(ViewKind::Comparison);
    assert_eq!(payload.view, ViewKind::Comparison);
    assert_eq!(payload.series.len(), 4);
    for entry in &payload.series {
        assert_eq!(entry.point_count(), 7);
    }
}

#[test]
fn unknown_view_name_is_rejected_and_nothing_changes() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());
    let before = dashboard.published().clone();

    let err = dashboard.set_active_view_named("UnknownView").unwrap_err();
    assert!(matches!(err, InvalidSelection::UnknownView(_)));

    assert_eq!(dashboard.selection().active_view, ViewKind::Trajectories);
    assert_eq!(dashboard.published(), &before);
}

#[test]
fn same_selection_twice_publishes_identical_series() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());

    let first = dashboard.set_active_view(ViewKind::DepthTime).clone();
    dashboard.set_active_view(ViewKind::Comparison);
    let second = dashboard.set_active_view(ViewKind::DepthTime).clone();

    assert_eq!(first, second);
}

#[test]
fn switching_views_keeps_float_and_date_selection() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());
    dashboard.set_selected_float(FloatId::new("2903124"));
    dashboard.set_selected_date(date(2024, 2, 1));

    dashboard.set_active_view(ViewKind::Comparison);
    dashboard.set_active_view(ViewKind::DepthTime);

    let selection = dashboard.selection();
    assert_eq!(selection.float_id, FloatId::new("2903124"));
    assert_eq!(selection.reference_date, date(2024, 2, 1));
}

#[test]
fn unknown_float_degrades_to_empty_series_set() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());

    let payload = dashboard.set_selected_float(FloatId::new("0000000"));
    assert_eq!(payload.view, ViewKind::Trajectories);
    assert!(payload.series.is_empty());
}

#[test]
fn unknown_date_degrades_to_empty_series_set() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());
    dashboard.set_active_view(ViewKind::DepthTime);

    let payload = dashboard.set_selected_date(date(1999, 1, 1));
    assert!(payload.series.is_empty());
}

#[test]
fn empty_store_degrades_everywhere() {
    let mut dashboard = DashboardController::new(InMemoryStore::default());

    for view in ViewKind::ALL {
        let payload = dashboard.set_active_view(view);
        assert_eq!(payload.view, view);
        assert!(payload.series.is_empty());
    }
}

#[test]
fn date_change_only_recomputes_the_active_view() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());
    dashboard.set_active_view(ViewKind::DepthTime);

    let january = dashboard.published().clone();
    let february = dashboard.set_selected_date(date(2024, 2, 1)).clone();

    assert_eq!(february.view, ViewKind::DepthTime);
    assert_ne!(january.series, february.series);
    assert_eq!(february.series[0].key, SeriesKey::Temperature);
}

#[test]
fn repeated_selection_is_served_from_cache() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());

    dashboard.set_active_view(ViewKind::DepthTime);
    dashboard.set_active_view(ViewKind::Trajectories);
    dashboard.set_active_view(ViewKind::DepthTime);
    dashboard.set_active_view(ViewKind::Trajectories);

    // Two distinct snapshots, regardless of how often they were revisited.
    assert_eq!(dashboard.cache.len(), 2);
}

#[test]
fn replace_store_invalidates_cached_series() {
    let mut dashboard = DashboardController::new(InMemoryStore::demo());
    let before = dashboard.published().clone();
    assert_eq!(before.series.len(), 5);

    dashboard.replace_store(InMemoryStore::default());

    // Same selection, refreshed (now empty) measurements.
    assert_eq!(dashboard.selection().float_id, FloatId::new("2903123"));
    assert!(dashboard.published().series.is_empty());
}

#[test]
fn payload_serializes_with_view_tag() {
    let dashboard = DashboardController::new(InMemoryStore::demo());

    let json = serde_json::to_value(dashboard.published()).unwrap();
    assert_eq!(json["view"], "trajectories");
    assert_eq!(json["series"].as_array().unwrap().len(), 5);
}
