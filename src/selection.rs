//! # Selection State
//!
//! The visitor's current dashboard selection: which view is active, which
//! float is selected, and which profile reference date is selected.
//!
//! The view enumeration is closed, so the typed setters cannot fail. The
//! string-facing setters are the boundary where untrusted UI input (tab
//! names, dropdown values) is parsed; a bad value is rejected with
//! [`InvalidSelection`] and the state is left unchanged. Unknown-but-well-
//! formed float ids and dates are not errors: the store treats sparse data as
//! routine and filters degrade to empty results.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::FloatId;

/// The three dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Per-float trajectory listing
    Trajectories,
    /// Depth-time vertical profile (temperature and salinity vs depth)
    DepthTime,
    /// Fixed-pair profile comparison
    Comparison,
}

impl ViewKind {
    /// Every view, in tab order.
    pub const ALL: [ViewKind; 3] = [
        ViewKind::Trajectories,
        ViewKind::DepthTime,
        ViewKind::Comparison,
    ];

    /// Canonical name used by the UI and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Trajectories => "trajectories",
            ViewKind::DepthTime => "depth-time",
            ViewKind::Comparison => "comparison",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trajectories" => Ok(ViewKind::Trajectories),
            "depth-time" => Ok(ViewKind::DepthTime),
            "comparison" => Ok(ViewKind::Comparison),
            _ => Err(InvalidSelection::UnknownView(s.to_string())),
        }
    }
}

/// Rejected selection input.
///
/// The only core-defined error: an enumerated selection field was set to a
/// value outside its closed set. Fatal to the offending call, never to the
/// dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelection {
    /// View name is not one of the enumerated views
    #[error("Unknown view '{0}' (expected trajectories, depth-time, or comparison)")]
    UnknownView(String),

    /// Reference date is not a calendar date in ISO format
    #[error("Invalid reference date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Immutable snapshot of the selection, taken via [`SelectionState::current`].
///
/// Exactly one value per field; also serves as the series cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionSnapshot {
    /// The active view
    pub active_view: ViewKind,
    /// The selected float
    pub float_id: FloatId,
    /// The selected profile reference date
    pub reference_date: NaiveDate,
}

/// The visitor's current selection.
///
/// Mutated only by explicit selection actions; setters have no side effects
/// beyond the field they update. Recomputation is the dashboard controller's
/// job, triggered by observing the change.
#[derive(Debug, Clone)]
pub struct SelectionState {
    active_view: ViewKind,
    float_id: FloatId,
    reference_date: NaiveDate,
}

impl SelectionState {
    /// Create a selection with explicit initial values.
    pub fn new(active_view: ViewKind, float_id: FloatId, reference_date: NaiveDate) -> Self {
        Self {
            active_view,
            float_id,
            reference_date,
        }
    }

    /// Snapshot the current selection.
    pub fn current(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            active_view: self.active_view,
            float_id: self.float_id.clone(),
            reference_date: self.reference_date,
        }
    }

    /// The active view.
    pub fn active_view(&self) -> ViewKind {
        self.active_view
    }

    /// The selected float.
    pub fn float_id(&self) -> &FloatId {
        &self.float_id
    }

    /// The selected profile reference date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Switch the active view. Leaves the float and date selections alone.
    pub fn set_active_view(&mut self, view: ViewKind) {
        self.active_view = view;
    }

    /// Select a float. Unknown ids are allowed; they match no records.
    pub fn set_selected_float(&mut self, float_id: FloatId) {
        self.float_id = float_id;
    }

    /// Select a profile reference date. Dates absent from the store are
    /// allowed; they match no samples.
    pub fn set_selected_date(&mut self, reference_date: NaiveDate) {
        self.reference_date = reference_date;
    }

    /// Switch the active view by UI name.
    ///
    /// Rejects names outside the closed view set; the state is unchanged on
    /// error.
    pub fn select_view_named(&mut self, name: &str) -> Result<ViewKind, InvalidSelection> {
        let view = name.parse::<ViewKind>()?;
        self.active_view = view;
        Ok(view)
    }

    /// Select a profile reference date from an ISO `YYYY-MM-DD` string.
    ///
    /// Rejects strings that are not calendar dates; the state is unchanged on
    /// error.
    pub fn select_date_named(&mut self, date: &str) -> Result<NaiveDate, InvalidSelection> {
        let parsed: NaiveDate = date
            .parse()
            .map_err(|_| InvalidSelection::InvalidDate(date.to_string()))?;
        self.reference_date = parsed;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SelectionState {
        SelectionState::new(
            ViewKind::Trajectories,
            FloatId::new("2903123"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn view_names_roundtrip() {
        for view in ViewKind::ALL {
            assert_eq!(view.as_str().parse::<ViewKind>().unwrap(), view);
        }
    }

    #[test]
    fn unknown_view_is_rejected_and_state_unchanged() {
        let mut selection = state();
        let err = selection.select_view_named("UnknownView").unwrap_err();

        assert_eq!(err, InvalidSelection::UnknownView("UnknownView".into()));
        assert_eq!(selection.active_view(), ViewKind::Trajectories);
    }

    #[test]
    fn malformed_date_is_rejected_and_state_unchanged() {
        let mut selection = state();
        let err = selection.select_date_named("01/15/2024").unwrap_err();

        assert_eq!(err, InvalidSelection::InvalidDate("01/15/2024".into()));
        assert_eq!(
            selection.reference_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn switching_view_leaves_other_fields_alone() {
        let mut selection = state();
        selection.set_active_view(ViewKind::Comparison);

        let snapshot = selection.current();
        assert_eq!(snapshot.active_view, ViewKind::Comparison);
        assert_eq!(snapshot.float_id, FloatId::new("2903123"));
        assert_eq!(
            snapshot.reference_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn selecting_float_leaves_view_alone() {
        let mut selection = state();
        selection.set_selected_float(FloatId::new("2903125"));

        assert_eq!(selection.active_view(), ViewKind::Trajectories);
        assert_eq!(selection.float_id(), &FloatId::new("2903125"));
    }

    #[test]
    fn view_parse_is_case_insensitive() {
        assert_eq!(
            "Depth-Time".parse::<ViewKind>().unwrap(),
            ViewKind::DepthTime
        );
    }
}
