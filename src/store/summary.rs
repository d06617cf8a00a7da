use std::fmt;

use chrono::NaiveDate;

use super::MeasurementStore;

/// Summary statistics about a measurement store
#[derive(Debug, Clone)]
pub struct StoreSummary {
    /// Number of distinct floats with trajectory data
    pub num_floats: usize,
    /// Total number of trajectory observations
    pub num_trajectory_records: usize,
    /// Number of distinct profile reference dates
    pub num_reference_dates: usize,
    /// Total number of vertical-profile samples
    pub num_profile_samples: usize,
    /// Number of rows in the comparison table
    pub num_comparison_rows: usize,
    /// Observation date range (min, max) across trajectories
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Depth range (min, max) in meters across profile samples
    pub profile_depth_range: Option<(f64, f64)>,
}

impl StoreSummary {
    /// Compute summary statistics from any store.
    pub fn from_store<S: MeasurementStore + ?Sized>(store: &S) -> Self {
        let floats = store.list_floats();
        let dates = store.list_reference_dates();

        let mut num_trajectory_records = 0;
        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;
        for float_id in &floats {
            for record in store.trajectories_for(float_id) {
                num_trajectory_records += 1;
                date_range = Some(match date_range {
                    None => (record.timestamp, record.timestamp),
                    Some((min, max)) => (min.min(record.timestamp), max.max(record.timestamp)),
                });
            }
        }

        let mut num_profile_samples = 0;
        let mut profile_depth_range: Option<(f64, f64)> = None;
        for date in &dates {
            for sample in store.profile_for(*date) {
                num_profile_samples += 1;
                profile_depth_range = Some(match profile_depth_range {
                    None => (sample.depth_m, sample.depth_m),
                    Some((min, max)) => (min.min(sample.depth_m), max.max(sample.depth_m)),
                });
            }
        }

        Self {
            num_floats: floats.len(),
            num_trajectory_records,
            num_reference_dates: dates.len(),
            num_profile_samples,
            num_comparison_rows: store.comparison_table().len(),
            date_range,
            profile_depth_range,
        }
    }
}

impl fmt::Display for StoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ArgoDash Store Summary")?;
        writeln!(f, "======================")?;
        writeln!(f, "Floats: {}", self.num_floats)?;
        writeln!(f, "Trajectory records: {}", self.num_trajectory_records)?;
        writeln!(f, "Profile dates: {}", self.num_reference_dates)?;
        writeln!(f, "Profile samples: {}", self.num_profile_samples)?;
        writeln!(f, "Comparison rows: {}", self.num_comparison_rows)?;
        if let Some((min, max)) = self.date_range {
            writeln!(f, "Trajectory date range: {} - {}", min, max)?;
        }
        if let Some((min, max)) = self.profile_depth_range {
            writeln!(f, "Profile depth range: {:.0} - {:.0} m", min, max)?;
        }
        Ok(())
    }
}
