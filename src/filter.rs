//! # View Filters
//!
//! Pure selection of the record subset each dashboard view renders.
//!
//! Filtering stays side-effect-free so recomputation on every selection
//! change is cheap and trivially testable; collections in this domain are
//! small enough that no caching is needed at this layer. Each filter
//! re-establishes its ordering invariant itself rather than trusting the
//! store, so any [`MeasurementStore`] implementation yields correctly ordered
//! views.

use chrono::NaiveDate;

use crate::store::{ComparisonSample, FloatId, FloatRecord, MeasurementStore, ProfileSample};

/// All trajectory observations for one float, ordered by timestamp ascending.
///
/// An empty or unknown float id yields an empty vector, not an error.
pub fn trajectories<S: MeasurementStore + ?Sized>(
    store: &S,
    float_id: &FloatId,
) -> Vec<FloatRecord> {
    let mut records = store.trajectories_for(float_id);
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    records
}

/// All vertical-profile samples at one reference date, ordered by depth
/// ascending.
///
/// A date with no samples yields an empty vector, not an error. Depth
/// uniqueness within a date is a store invariant, so the result is strictly
/// increasing in depth.
pub fn depth_profile<S: MeasurementStore + ?Sized>(
    store: &S,
    reference_date: NaiveDate,
) -> Vec<ProfileSample> {
    let mut samples = store.profile_for(reference_date);
    samples.sort_by(|a, b| a.depth_m.total_cmp(&b.depth_m));
    samples
}

/// The full pre-aligned comparison table, ordered by depth ascending.
///
/// Comparison is always between the store's fixed float pair; it has no
/// selection dependency.
pub fn comparison<S: MeasurementStore + ?Sized>(store: &S) -> Vec<ComparisonSample> {
    let mut rows = store.comparison_table();
    rows.sort_by(|a, b| a.depth_m.total_cmp(&b.depth_m));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn trajectories_for_demo_float_are_date_ordered() {
        let store = InMemoryStore::demo();
        let records = trajectories(&store, &FloatId::new("2903123"));

        assert_eq!(records.len(), 5);
        let expected = [
            (date(2024, 1, 15), 0.0),
            (date(2024, 1, 25), 10.0),
            (date(2024, 2, 5), 50.0),
            (date(2024, 2, 15), 100.0),
            (date(2024, 2, 25), 200.0),
        ];
        for (record, (timestamp, depth)) in records.iter().zip(expected) {
            assert_eq!(record.timestamp, timestamp);
            assert_eq!(record.depth_m, depth);
        }
    }

    #[test]
    fn empty_float_id_yields_empty_sequence() {
        let store = InMemoryStore::demo();
        assert!(trajectories(&store, &FloatId::default()).is_empty());
    }

    #[test]
    fn unknown_selectors_yield_empty_sequences() {
        let store = InMemoryStore::demo();
        assert!(trajectories(&store, &FloatId::new("0000000")).is_empty());
        assert!(depth_profile(&store, date(1999, 12, 31)).is_empty());
    }

    #[test]
    fn depth_profile_is_strictly_increasing() {
        let store = InMemoryStore::demo();
        let samples = depth_profile(&store, date(2024, 1, 1));

        assert_eq!(samples.len(), 7);
        for pair in samples.windows(2) {
            assert!(pair[0].depth_m < pair[1].depth_m);
        }
    }

    #[test]
    fn comparison_is_depth_ordered() {
        let store = InMemoryStore::demo();
        let rows = comparison(&store);

        assert_eq!(rows.len(), 7);
        for pair in rows.windows(2) {
            assert!(pair[0].depth_m < pair[1].depth_m);
        }
    }

    fn arb_trajectories() -> impl Strategy<Value = Vec<FloatRecord>> {
        let record = (
            prop::sample::select(vec!["2903123", "2903124", "2903125"]),
            0u64..365,
            -60.0..60.0f64,
            -179.0..179.0f64,
            0.0..2000.0f64,
            -2.0..30.0f64,
        )
            .prop_map(|(id, day, latitude, longitude, depth_m, temperature_c)| FloatRecord {
                float_id: FloatId::new(id),
                timestamp: date(2024, 1, 1) + chrono::Days::new(day),
                latitude,
                longitude,
                depth_m,
                temperature_c,
            });
        prop::collection::vec(record, 0..60)
    }

    proptest! {
        #[test]
        fn trajectories_filter_only_matches_and_orders(records in arb_trajectories()) {
            let store = InMemoryStore::builder()
                .trajectories(records)
                .build()
                .unwrap();

            for float_id in store.list_floats() {
                let filtered = trajectories(&store, &float_id);
                for record in &filtered {
                    prop_assert_eq!(&record.float_id, &float_id);
                }
                for pair in filtered.windows(2) {
                    prop_assert!(pair[0].timestamp <= pair[1].timestamp);
                }
            }
        }

        #[test]
        fn depth_profile_filter_only_matches_and_orders(
            cells in prop::collection::btree_set((0u64..6, 0u32..40), 0..60)
        ) {
            // Unique (date, depth-bin) cells guarantee the store invariant holds.
            let samples = cells.into_iter().map(|(day, bin)| ProfileSample {
                reference_date: date(2024, 1, 1) + chrono::Days::new(day),
                depth_m: bin as f64 * 25.0,
                temperature_c: 10.0,
                salinity_psu: 34.5,
            });
            let store = InMemoryStore::builder()
                .profile_samples(samples)
                .build()
                .unwrap();

            for reference_date in store.list_reference_dates() {
                let filtered = depth_profile(&store, reference_date);
                for sample in &filtered {
                    prop_assert_eq!(sample.reference_date, reference_date);
                }
                for pair in filtered.windows(2) {
                    prop_assert!(pair[0].depth_m < pair[1].depth_m);
                }
            }
        }
    }
}
