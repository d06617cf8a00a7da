//! # Dataset Bundle Validator
//!
//! Structural and invariant checks over a dataset bundle directory. Unlike
//! [`store::load_bundle`](crate::store::load_bundle), which fails fast on the
//! first violation, the validator reads leniently and reports every finding,
//! so a curator can fix a bundle in one pass.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::store::{
    ComparisonSample, FloatRecord, ProfileSample, StoreError, BUNDLE_FORMAT_VERSION,
    COMPARISON_FILE, METADATA_FILE, PROFILES_FILE, TRAJECTORIES_FILE,
};

/// Validation check result status
#[derive(Debug, Clone)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

/// Individual validation check result
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Name of the validation check
    pub name: String,
    /// Result status of the check
    pub status: CheckStatus,
}

/// Complete validation report for a dataset bundle
#[derive(Debug)]
pub struct ValidationReport {
    /// List of individual validation check results
    pub checks: Vec<ValidationCheck>,
    /// Path of the bundle that was validated
    pub bundle_path: String,
}

impl ValidationReport {
    fn new(bundle_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            bundle_path: bundle_path.into(),
        }
    }

    fn ok(&mut self, name: &str) {
        self.checks.push(ValidationCheck {
            name: name.to_string(),
            status: CheckStatus::Ok,
        });
    }

    fn warning(&mut self, name: &str, message: impl Into<String>) {
        self.checks.push(ValidationCheck {
            name: name.to_string(),
            status: CheckStatus::Warning(message.into()),
        });
    }

    fn failed(&mut self, name: &str, message: impl Into<String>) {
        self.checks.push(ValidationCheck {
            name: name.to_string(),
            status: CheckStatus::Failed(message.into()),
        });
    }

    /// Check if any validation checks failed
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(c.status, CheckStatus::Failed(_)))
    }

    /// Count the number of successful checks
    pub fn success_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Ok))
            .count()
    }

    /// Count the number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Warning(_)))
            .count()
    }

    /// Count the number of failures
    pub fn failure_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Failed(_)))
            .count()
    }

    /// Format the report with colors (requires the `colorized_output` feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();
            output.push_str(&format!(
                "{}\n",
                style("ArgoDash Bundle Validation").bold().cyan()
            ));
            output.push_str(&format!("{}\n", style("==========================").cyan()));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Bundle").bold(),
                self.bundle_path
            ));

            for check in &self.checks {
                match &check.status {
                    CheckStatus::Ok => {
                        output.push_str(&format!("[{}] {}\n", OK, style(&check.name).green()));
                    }
                    CheckStatus::Warning(msg) => {
                        output.push_str(&format!(
                            "[{}] {} - {}: {}\n",
                            WARN,
                            style(&check.name).yellow(),
                            style("WARNING").yellow().bold(),
                            msg
                        ));
                    }
                    CheckStatus::Failed(msg) => {
                        output.push_str(&format!(
                            "[{}] {} - {}: {}\n",
                            FAIL,
                            style(&check.name).red(),
                            style("FAILED").red().bold(),
                            msg
                        ));
                    }
                }
            }

            output.push_str(&format!(
                "\n{}: {} passed, {} warnings, {} failed\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ArgoDash Bundle Validation")?;
        writeln!(f, "==========================")?;
        writeln!(f, "Bundle: {}", self.bundle_path)?;
        writeln!(f)?;

        for check in &self.checks {
            match &check.status {
                CheckStatus::Ok => writeln!(f, "[✓] {}", check.name)?,
                CheckStatus::Warning(msg) => {
                    writeln!(f, "[⚠] {} - WARNING: {}", check.name, msg)?
                }
                CheckStatus::Failed(msg) => writeln!(f, "[✗] {} - FAILED: {}", check.name, msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }
}

/// Validate a dataset bundle directory and report every finding.
///
/// Only I/O failures on files that exist surface as errors; missing files,
/// malformed rows, and invariant violations all become report entries.
pub fn validate_bundle(dir: &Path) -> Result<ValidationReport, StoreError> {
    let mut report = ValidationReport::new(dir.display().to_string());

    if !dir.is_dir() {
        report.failed(
            "Bundle directory",
            format!("{} is not a directory", dir.display()),
        );
        return Ok(report);
    }
    report.ok("Bundle directory");

    check_metadata(dir, &mut report)?;

    let trajectories: Vec<FloatRecord> =
        check_records(dir, TRAJECTORIES_FILE, "Trajectory records", &mut report)?;
    let profiles: Vec<ProfileSample> =
        check_records(dir, PROFILES_FILE, "Profile samples", &mut report)?;
    let comparison: Vec<ComparisonSample> =
        check_records(dir, COMPARISON_FILE, "Comparison rows", &mut report)?;

    check_depths(&mut report, &trajectories, &profiles, &comparison);
    check_profile_uniqueness(&mut report, &profiles);
    check_comparison_alignment(&mut report, &comparison);
    check_pair_coverage(&mut report, &trajectories);

    Ok(report)
}

fn check_metadata(dir: &Path, report: &mut ValidationReport) -> Result<(), StoreError> {
    let path = dir.join(METADATA_FILE);
    if !path.is_file() {
        report.warning("Bundle metadata", format!("{} is missing", METADATA_FILE));
        return Ok(());
    }

    let content = std::fs::read_to_string(&path)?;
    match serde_json::from_str::<crate::store::BundleMetadata>(&content) {
        Ok(metadata) if metadata.format_version == BUNDLE_FORMAT_VERSION => {
            report.ok("Bundle metadata");
        }
        Ok(metadata) => report.warning(
            "Bundle metadata",
            format!(
                "format version {} (validator supports {})",
                metadata.format_version, BUNDLE_FORMAT_VERSION
            ),
        ),
        Err(e) => report.failed("Bundle metadata", e.to_string()),
    }
    Ok(())
}

/// Lenient CSV read: malformed rows are counted, well-formed rows kept.
fn check_records<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    check: &str,
    report: &mut ValidationReport,
) -> Result<Vec<T>, StoreError> {
    let path = dir.join(file);
    if !path.is_file() {
        report.failed(check, format!("{} is missing", file));
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let mut records = Vec::new();
    let mut bad_rows = 0usize;
    for row in reader.deserialize() {
        match row {
            Ok(record) => records.push(record),
            Err(_) => bad_rows += 1,
        }
    }

    if bad_rows > 0 {
        report.failed(check, format!("{} malformed rows in {}", bad_rows, file));
    } else {
        report.ok(check);
    }
    Ok(records)
}

fn check_depths(
    report: &mut ValidationReport,
    trajectories: &[FloatRecord],
    profiles: &[ProfileSample],
    comparison: &[ComparisonSample],
) {
    let bad = trajectories
        .iter()
        .map(|r| r.depth_m)
        .chain(profiles.iter().map(|s| s.depth_m))
        .chain(comparison.iter().map(|c| c.depth_m))
        .filter(|d| *d < 0.0 || !d.is_finite())
        .count();

    if bad > 0 {
        report.failed(
            "Non-negative depths",
            format!("{} invalid depth values", bad),
        );
    } else {
        report.ok("Non-negative depths");
    }
}

fn check_profile_uniqueness(report: &mut ValidationReport, profiles: &[ProfileSample]) {
    let mut sorted: Vec<_> = profiles
        .iter()
        .map(|s| (s.reference_date, s.depth_m))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let duplicates = sorted.windows(2).filter(|pair| pair[0] == pair[1]).count();
    if duplicates > 0 {
        report.failed(
            "Profile depth uniqueness",
            format!("{} duplicate (date, depth) pairs", duplicates),
        );
    } else {
        report.ok("Profile depth uniqueness");
    }
}

fn check_comparison_alignment(report: &mut ValidationReport, comparison: &[ComparisonSample]) {
    let mut depths: Vec<f64> = comparison.iter().map(|c| c.depth_m).collect();
    depths.sort_by(|a, b| a.total_cmp(b));

    let duplicates = depths.windows(2).filter(|pair| pair[0] == pair[1]).count();
    if duplicates > 0 {
        report.failed(
            "Comparison depth alignment",
            format!("{} duplicate depth bins", duplicates),
        );
    } else {
        report.ok("Comparison depth alignment");
    }
}

fn check_pair_coverage(report: &mut ValidationReport, trajectories: &[FloatRecord]) {
    let missing: Vec<&str> = [
        crate::series::PRIMARY_FLOAT_ID,
        crate::series::SECONDARY_FLOAT_ID,
    ]
    .into_iter()
    .filter(|id| !trajectories.iter().any(|r| r.float_id.as_str() == *id))
    .collect();

    if missing.is_empty() {
        report.ok("Comparison pair coverage");
    } else {
        report.warning(
            "Comparison pair coverage",
            format!("no trajectory records for {}", missing.join(", ")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load_bundle, write_bundle, BundleMetadata, InMemoryStore};
    use tempfile::tempdir;

    #[test]
    fn demo_bundle_validates_clean() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("demo.argodash");
        let store = InMemoryStore::demo();
        write_bundle(&path, &store, &BundleMetadata::for_store(&store)).unwrap();

        let report = validate_bundle(&path).unwrap();
        assert!(!report.has_failures());
        assert_eq!(report.warning_count(), 0);
        assert!(load_bundle(&path).is_ok());
    }

    #[test]
    fn missing_files_are_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let report = validate_bundle(dir.path()).unwrap();

        assert!(report.has_failures());
        assert_eq!(report.failure_count(), 3);
    }

    #[test]
    fn nonexistent_directory_fails_structure_check() {
        let report = validate_bundle(Path::new("/nonexistent/bundle")).unwrap();
        assert!(report.has_failures());
        assert_eq!(report.checks.len(), 1);
    }

    #[test]
    fn malformed_rows_are_counted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.argodash");
        let store = InMemoryStore::demo();
        write_bundle(&path, &store, &BundleMetadata::for_store(&store)).unwrap();

        let csv_path = path.join(PROFILES_FILE);
        let mut content = std::fs::read_to_string(&csv_path).unwrap();
        content.push_str("not,a,valid,row\n");
        std::fs::write(&csv_path, content).unwrap();

        let report = validate_bundle(&path).unwrap();
        assert!(report.has_failures());
        // Loading the same bundle fails fast on the same defect.
        assert!(load_bundle(&path).is_err());
    }

    #[test]
    fn duplicate_profile_depths_fail_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dup.argodash");
        let store = InMemoryStore::demo();
        write_bundle(&path, &store, &BundleMetadata::for_store(&store)).unwrap();

        let csv_path = path.join(PROFILES_FILE);
        let mut content = std::fs::read_to_string(&csv_path).unwrap();
        content.push_str("2024-01-01,0.0,18.5,34.2\n");
        std::fs::write(&csv_path, content).unwrap();

        let report = validate_bundle(&path).unwrap();
        assert!(report.has_failures());
    }

    #[test]
    fn report_displays_summary_line() {
        let dir = tempdir().unwrap();
        let report = validate_bundle(dir.path()).unwrap();
        let text = report.to_string();

        assert!(text.contains("ArgoDash Bundle Validation"));
        assert!(text.contains("Summary:"));
    }
}
