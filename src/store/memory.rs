use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::error::StoreError;
use super::types::{ComparisonSample, FloatId, FloatRecord, ProfileSample};
use super::MeasurementStore;

/// In-memory measurement store backed by plain record vectors.
///
/// This is the canonical [`MeasurementStore`] implementation: the CSV bundle
/// loader produces one, and tests and the demo dataset construct one
/// directly. Collections are held sorted (trajectories by float and
/// timestamp, profiles and comparison rows by depth) and validated by
/// [`StoreBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    trajectories: Vec<FloatRecord>,
    profiles: Vec<ProfileSample>,
    comparison: Vec<ComparisonSample>,
}

impl InMemoryStore {
    /// Start building a store record by record.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// All trajectory observations, sorted by float id then timestamp.
    pub fn trajectories(&self) -> &[FloatRecord] {
        &self.trajectories
    }

    /// All profile samples, sorted by reference date then depth.
    pub fn profiles(&self) -> &[ProfileSample] {
        &self.profiles
    }

    /// The comparison table, sorted by depth.
    pub fn comparison(&self) -> &[ComparisonSample] {
        &self.comparison
    }

    /// Returns true if the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty() && self.profiles.is_empty() && self.comparison.is_empty()
    }

    /// The reference dataset shipped with the dashboard.
    ///
    /// Two floats drifting east across the North Pacific, monthly vertical
    /// profiles for early 2024, and the pre-aligned 2903123 / 2903124
    /// comparison table.
    pub fn demo() -> Self {
        let traj = |id: &str, date: NaiveDate, lat: f64, lon: f64, depth: f64, temp: f64| {
            FloatRecord {
                float_id: FloatId::new(id),
                timestamp: date,
                latitude: lat,
                longitude: lon,
                depth_m: depth,
                temperature_c: temp,
            }
        };
        let prof = |date: NaiveDate, depth: f64, temp: f64, sal: f64| ProfileSample {
            reference_date: date,
            depth_m: depth,
            temperature_c: temp,
            salinity_psu: sal,
        };
        let cmp = |depth: f64, t1: f64, t2: f64, s1: f64, s2: f64| ComparisonSample {
            depth_m: depth,
            primary_temperature_c: t1,
            secondary_temperature_c: t2,
            primary_salinity_psu: s1,
            secondary_salinity_psu: s2,
        };

        let jan01 = demo_date(2024, 1, 1);
        let feb01 = demo_date(2024, 2, 1);
        let mar01 = demo_date(2024, 3, 1);

        Self {
            trajectories: vec![
                traj("2903123", demo_date(2024, 1, 15), 35.2, -140.5, 0.0, 18.5),
                traj("2903123", demo_date(2024, 1, 25), 35.8, -139.2, 10.0, 17.2),
                traj("2903123", demo_date(2024, 2, 5), 36.1, -138.8, 50.0, 16.8),
                traj("2903123", demo_date(2024, 2, 15), 36.4, -138.1, 100.0, 15.1),
                traj("2903123", demo_date(2024, 2, 25), 36.8, -137.5, 200.0, 12.3),
                traj("2903124", demo_date(2024, 1, 15), 34.9, -141.2, 0.0, 19.2),
                traj("2903124", demo_date(2024, 1, 25), 35.3, -140.6, 10.0, 18.1),
                traj("2903124", demo_date(2024, 2, 5), 35.7, -139.9, 50.0, 17.1),
                traj("2903124", demo_date(2024, 2, 15), 36.0, -139.3, 100.0, 15.8),
                traj("2903124", demo_date(2024, 2, 25), 36.2, -138.6, 200.0, 13.1),
            ],
            profiles: vec![
                prof(jan01, 0.0, 18.5, 34.2),
                prof(jan01, 50.0, 16.8, 34.5),
                prof(jan01, 100.0, 15.1, 34.8),
                prof(jan01, 200.0, 12.3, 35.0),
                prof(jan01, 500.0, 8.7, 34.9),
                prof(jan01, 1000.0, 4.2, 34.7),
                prof(jan01, 2000.0, 2.1, 34.6),
                prof(feb01, 0.0, 17.9, 34.3),
                prof(feb01, 50.0, 16.5, 34.5),
                prof(feb01, 100.0, 14.8, 34.8),
                prof(feb01, 200.0, 12.0, 35.0),
                prof(feb01, 500.0, 8.5, 34.9),
                prof(feb01, 1000.0, 4.1, 34.7),
                prof(feb01, 2000.0, 2.1, 34.6),
                prof(mar01, 0.0, 17.2, 34.3),
                prof(mar01, 50.0, 16.1, 34.6),
                prof(mar01, 100.0, 14.5, 34.9),
                prof(mar01, 200.0, 11.8, 35.1),
                prof(mar01, 500.0, 8.4, 34.9),
                prof(mar01, 1000.0, 4.0, 34.7),
                prof(mar01, 2000.0, 2.0, 34.6),
            ],
            comparison: vec![
                cmp(0.0, 18.5, 19.2, 34.2, 34.1),
                cmp(50.0, 16.8, 17.1, 34.5, 34.4),
                cmp(100.0, 15.1, 15.8, 34.8, 34.7),
                cmp(200.0, 12.3, 13.1, 35.0, 34.9),
                cmp(500.0, 8.7, 9.2, 34.9, 34.8),
                cmp(1000.0, 4.2, 4.8, 34.7, 34.6),
                cmp(2000.0, 2.1, 2.5, 34.6, 34.5),
            ],
        }
    }
}

/// Build a demo-data calendar date. The literals above are all valid.
fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo calendar date")
}

impl MeasurementStore for InMemoryStore {
    fn list_floats(&self) -> Vec<FloatId> {
        let ids: BTreeSet<&FloatId> = self.trajectories.iter().map(|r| &r.float_id).collect();
        ids.into_iter().cloned().collect()
    }

    fn list_reference_dates(&self) -> Vec<NaiveDate> {
        let dates: BTreeSet<NaiveDate> = self.profiles.iter().map(|s| s.reference_date).collect();
        dates.into_iter().collect()
    }

    fn trajectories_for(&self, float_id: &FloatId) -> Vec<FloatRecord> {
        self.trajectories
            .iter()
            .filter(|r| &r.float_id == float_id)
            .cloned()
            .collect()
    }

    fn profile_for(&self, reference_date: NaiveDate) -> Vec<ProfileSample> {
        self.profiles
            .iter()
            .filter(|s| s.reference_date == reference_date)
            .cloned()
            .collect()
    }

    fn comparison_table(&self) -> Vec<ComparisonSample> {
        self.comparison.clone()
    }
}

/// Incremental [`InMemoryStore`] constructor.
///
/// Records may be added in any order; [`build`](Self::build) sorts the
/// collections and enforces the store invariants (non-negative depths, unique
/// profile depths per reference date, unique comparison depth bins).
#[derive(Debug, Default)]
pub struct StoreBuilder {
    trajectories: Vec<FloatRecord>,
    profiles: Vec<ProfileSample>,
    comparison: Vec<ComparisonSample>,
}

impl StoreBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trajectory observation.
    pub fn trajectory(mut self, record: FloatRecord) -> Self {
        self.trajectories.push(record);
        self
    }

    /// Add a batch of trajectory observations.
    pub fn trajectories(mut self, records: impl IntoIterator<Item = FloatRecord>) -> Self {
        self.trajectories.extend(records);
        self
    }

    /// Add one vertical-profile sample.
    pub fn profile_sample(mut self, sample: ProfileSample) -> Self {
        self.profiles.push(sample);
        self
    }

    /// Add a batch of vertical-profile samples.
    pub fn profile_samples(mut self, samples: impl IntoIterator<Item = ProfileSample>) -> Self {
        self.profiles.extend(samples);
        self
    }

    /// Add one comparison row.
    pub fn comparison_row(mut self, row: ComparisonSample) -> Self {
        self.comparison.push(row);
        self
    }

    /// Add a batch of comparison rows.
    pub fn comparison_rows(mut self, rows: impl IntoIterator<Item = ComparisonSample>) -> Self {
        self.comparison.extend(rows);
        self
    }

    /// Sort, validate, and produce the finished store.
    pub fn build(self) -> Result<InMemoryStore, StoreError> {
        let Self {
            mut trajectories,
            mut profiles,
            mut comparison,
        } = self;

        for record in &trajectories {
            check_depth(record.depth_m, "trajectory record")?;
        }
        for sample in &profiles {
            check_depth(sample.depth_m, "profile sample")?;
        }
        for row in &comparison {
            check_depth(row.depth_m, "comparison row")?;
        }

        trajectories.sort_by(|a, b| {
            a.float_id
                .cmp(&b.float_id)
                .then(a.timestamp.cmp(&b.timestamp))
        });

        profiles.sort_by(|a, b| {
            a.reference_date
                .cmp(&b.reference_date)
                .then(a.depth_m.total_cmp(&b.depth_m))
        });
        for pair in profiles.windows(2) {
            if pair[0].reference_date == pair[1].reference_date && pair[0].depth_m == pair[1].depth_m
            {
                return Err(StoreError::DuplicateProfileDepth {
                    reference_date: pair[0].reference_date,
                    depth_m: pair[0].depth_m,
                });
            }
        }

        comparison.sort_by(|a, b| a.depth_m.total_cmp(&b.depth_m));
        for pair in comparison.windows(2) {
            if pair[0].depth_m == pair[1].depth_m {
                return Err(StoreError::DuplicateComparisonDepth(pair[0].depth_m));
            }
        }

        Ok(InMemoryStore {
            trajectories,
            profiles,
            comparison,
        })
    }
}

fn check_depth(depth_m: f64, context: &'static str) -> Result<(), StoreError> {
    if depth_m < 0.0 || !depth_m.is_finite() {
        return Err(StoreError::InvalidDepth { depth_m, context });
    }
    Ok(())
}
