//! # Dashboard Controller
//!
//! Composes the selection state, view filters, and chart adapters: selection
//! actions mutate the state, the active view's series are recomputed, and the
//! result is published for the rendering surface.
//!
//! The controller is a three-state machine over [`ViewKind`]; transitions
//! happen only via explicit selection calls, and no state is terminal. Every
//! recomputation covers the active view only — the other views are derived
//! lazily when activated. The whole update runs synchronously within one
//! logical step: a new selection action simply supersedes the previous
//! published value.
//!
//! ## Example
//!
//! ```rust
//! use argodash::dashboard::DashboardController;
//! use argodash::selection::ViewKind;
//! use argodash::store::InMemoryStore;
//!
//! let mut dashboard = DashboardController::new(InMemoryStore::demo());
//!
//! let payload = dashboard.set_active_view(ViewKind::DepthTime);
//! assert_eq!(payload.series.len(), 2);
//!
//! // Unknown selectors degrade to an empty series set, never an error.
//! let payload = dashboard.set_selected_float("0000000".into());
//! assert_eq!(payload.view, ViewKind::DepthTime);
//! ```

mod cache;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::filter;
use crate::selection::{InvalidSelection, SelectionSnapshot, SelectionState, ViewKind};
use crate::series::{self, Series};
use crate::store::{FloatId, MeasurementStore};

use cache::SeriesCache;

/// The value published for the rendering surface after every recomputation.
///
/// The surface draws axes, tooltips, and interaction chrome from this alone.
/// An empty `series` set renders as a placeholder chart area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    /// Which view the series belong to
    pub view: ViewKind,
    /// The active view's series, rebuilt wholesale on each selection change
    pub series: Vec<Series>,
}

/// Owns the selection state and drives the filter → adapt → publish cycle.
///
/// The controller is the selection state's only writer. It owns its store for
/// the lifetime of the dashboard session; [`replace_store`](Self::replace_store)
/// swaps in refreshed measurements and invalidates the series cache.
#[derive(Debug)]
pub struct DashboardController<S: MeasurementStore> {
    store: S,
    selection: SelectionState,
    cache: SeriesCache,
    published: RenderPayload,
}

impl<S: MeasurementStore> DashboardController<S> {
    /// Create a controller over `store` and publish the initial view.
    ///
    /// Defaults to the trajectory view with the first available float and
    /// reference date. An empty store falls back to selectors that match
    /// nothing, so every view degrades to an empty series set rather than an
    /// error.
    pub fn new(store: S) -> Self {
        let float_id = store.list_floats().into_iter().next().unwrap_or_default();
        let reference_date = store
            .list_reference_dates()
            .into_iter()
            .next()
            .unwrap_or_default();

        let selection = SelectionState::new(ViewKind::Trajectories, float_id, reference_date);
        let mut controller = Self {
            store,
            selection,
            cache: SeriesCache::new(),
            published: RenderPayload {
                view: ViewKind::Trajectories,
                series: Vec::new(),
            },
        };
        controller.recompute();
        controller
    }

    /// The most recently published payload.
    pub fn published(&self) -> &RenderPayload {
        &self.published
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> SelectionSnapshot {
        self.selection.current()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch the active view and publish its series.
    pub fn set_active_view(&mut self, view: ViewKind) -> &RenderPayload {
        self.selection.set_active_view(view);
        self.recompute();
        &self.published
    }

    /// Switch the active view by UI name.
    ///
    /// An unknown name is rejected with [`InvalidSelection`]; the selection
    /// and the published payload stay unchanged, so the caller can disable
    /// the impossible action rather than silently ignore it.
    pub fn set_active_view_named(&mut self, name: &str) -> Result<&RenderPayload, InvalidSelection> {
        self.selection.select_view_named(name)?;
        self.recompute();
        Ok(&self.published)
    }

    /// Select a float and republish the active view.
    ///
    /// Only the active view is recomputed; an unknown id degrades to an empty
    /// series set.
    pub fn set_selected_float(&mut self, float_id: FloatId) -> &RenderPayload {
        self.selection.set_selected_float(float_id);
        self.recompute();
        &self.published
    }

    /// Select a profile reference date and republish the active view.
    pub fn set_selected_date(&mut self, reference_date: NaiveDate) -> &RenderPayload {
        self.selection.set_selected_date(reference_date);
        self.recompute();
        &self.published
    }

    /// Select a profile reference date from an ISO `YYYY-MM-DD` string.
    pub fn set_selected_date_named(
        &mut self,
        date: &str,
    ) -> Result<&RenderPayload, InvalidSelection> {
        self.selection.select_date_named(date)?;
        self.recompute();
        Ok(&self.published)
    }

    /// Swap in a refreshed store, drop all cached series, and republish.
    ///
    /// The selection is kept; selectors that no longer match the new
    /// measurements degrade to empty series sets.
    pub fn replace_store(&mut self, store: S) {
        self.store = store;
        self.cache.clear();
        self.recompute();
    }

    /// Derive the active view's series and publish them.
    fn recompute(&mut self) {
        let snapshot = self.selection.current();
        let series = match self.cache.get(&snapshot) {
            Some(series) => series.clone(),
            None => {
                let series = compute_series(&self.store, &snapshot);
                self.cache.insert(snapshot.clone(), series.clone());
                series
            }
        };

        debug!(
            "Publishing {} with {} series (float {}, date {})",
            snapshot.active_view,
            series.len(),
            snapshot.float_id,
            snapshot.reference_date
        );

        self.published = RenderPayload {
            view: snapshot.active_view,
            series,
        };
    }
}

/// Filter + adapt for one selection snapshot. Pure; the cache relies on that.
fn compute_series<S: MeasurementStore>(store: &S, snapshot: &SelectionSnapshot) -> Vec<Series> {
    match snapshot.active_view {
        ViewKind::Trajectories => {
            series::trajectory_series(&filter::trajectories(store, &snapshot.float_id))
        }
        ViewKind::DepthTime => {
            series::depth_profile_series(&filter::depth_profile(store, snapshot.reference_date))
        }
        ViewKind::Comparison => series::comparison_series(&filter::comparison(store)),
    }
}
