//! # ArgoDash - Ocean Float Profile Dashboard Core
//!
//! `argodash` is the selection-and-rendering core behind an interactive
//! dashboard for autonomous ocean float data: trajectory listings, depth-time
//! vertical profiles, and fixed-pair profile comparison.
//!
//! ## Key Features
//!
//! - **Pluggable Measurement Store**: a small synchronous query trait over
//!   trajectory observations, vertical-profile samples, and a pre-aligned
//!   comparison table. Ships with an in-memory implementation and a CSV
//!   dataset-bundle backing.
//!
//! - **Pure View Pipeline**: selection change → view filter → chart adapter →
//!   published series, with no hidden state. The same selection always yields
//!   the same series set.
//!
//! - **Closed Selection Errors**: only values outside a closed enumeration
//!   (view names, date syntax) are errors. Unknown floats and dates are
//!   routine sparse data and degrade to empty series sets.
//!
//! - **Declarative Series Output**: the rendering surface receives axis
//!   bindings, series keys, display labels, and ordered points; it owns axes,
//!   tooltips, and interaction chrome.
//!
//! ## Quick Start
//!
//! ```rust
//! use argodash::dashboard::DashboardController;
//! use argodash::selection::ViewKind;
//! use argodash::store::{FloatId, InMemoryStore};
//!
//! // Build a dashboard over the demo dataset.
//! let mut dashboard = DashboardController::new(InMemoryStore::demo());
//!
//! // Tab click: switch to the depth-time view.
//! let payload = dashboard.set_active_view(ViewKind::DepthTime);
//! assert_eq!(payload.series.len(), 2);
//! assert_eq!(payload.series[0].label, "Temperature");
//!
//! // Dropdown selection: pick a float for the trajectory listing.
//! dashboard.set_active_view(ViewKind::Trajectories);
//! let payload = dashboard.set_selected_float(FloatId::new("2903124"));
//! assert_eq!(payload.series.len(), 5);
//! ```
//!
//! ## Loading a dataset bundle
//!
//! ```rust,no_run
//! use argodash::dashboard::DashboardController;
//! use argodash::store::load_bundle;
//!
//! let store = load_bundle("pacific_2024.argodash".as_ref())?;
//! let dashboard = DashboardController::new(store);
//! println!("{} series published", dashboard.published().series.len());
//! # Ok::<(), argodash::store::StoreError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`store`]: measurement record types, the [`store::MeasurementStore`]
//!   query trait, the in-memory store, and CSV dataset bundles
//! - [`selection`]: the visitor's selection state and its closed view
//!   enumeration
//! - [`filter`]: pure per-view record filters
//! - [`series`]: chart adapters and static per-view series configuration
//! - [`dashboard`]: the controller composing selection, filters, and adapters
//! - [`validator`]: dataset-bundle integrity reports
//!
//! ## Data flow
//!
//! ```text
//! user action
//!   └─> DashboardController        (mutates SelectionState)
//!         └─> filter::*            (selects + orders records)
//!               └─> series::*      (reshapes into Series)
//!                     └─> RenderPayload {view, series}   (published)
//! ```
//!
//! Every step is synchronous and runs within one logical update; a new
//! selection action simply supersedes the previous published value.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dashboard;
pub mod filter;
pub mod selection;
pub mod series;
pub mod store;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dashboard::{DashboardController, RenderPayload};
    pub use crate::selection::{InvalidSelection, SelectionSnapshot, SelectionState, ViewKind};
    pub use crate::series::{
        LineStyle, Series, SeriesKey, SeriesPoint, PRIMARY_FLOAT_ID, SECONDARY_FLOAT_ID,
    };
    pub use crate::store::{
        load_bundle, write_bundle, BundleMetadata, ComparisonSample, FloatId, FloatRecord,
        InMemoryStore, MeasurementStore, ProfileSample, StoreBuilder, StoreError, StoreSummary,
    };
    pub use crate::validator::{validate_bundle, ValidationReport};
}
