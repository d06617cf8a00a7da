//! # Measurement Store
//!
//! Read-only access to the float observation collections the dashboard
//! renders: trajectory points, depth-profile samples, and the pre-aligned
//! comparison table.
//!
//! The dashboard core never fetches anything itself. Whatever backs a store
//! (in-memory literals, a CSV dataset bundle, a future network client) must
//! expose a synchronous, already-resolved view by the time filtering begins.
//!
//! ## Example
//!
//! ```rust
//! use argodash::store::{InMemoryStore, MeasurementStore};
//!
//! let store = InMemoryStore::demo();
//! let floats = store.list_floats();
//! assert!(!floats.is_empty());
//!
//! let track = store.trajectories_for(&floats[0]);
//! println!("{} has {} trajectory points", floats[0], track.len());
//! ```

mod bundle;
mod error;
mod memory;
mod summary;
mod types;


pub use bundle::{
    load_bundle, write_bundle, BundleMetadata, BUNDLE_FORMAT_VERSION, COMPARISON_FILE,
    METADATA_FILE, PROFILES_FILE, TRAJECTORIES_FILE,
};
pub use error::StoreError;
pub use memory::{InMemoryStore, StoreBuilder};
pub use summary::StoreSummary;
pub use types::{ComparisonSample, FloatId, FloatRecord, ProfileSample};

use chrono::NaiveDate;

/// Query contract every measurement backing must satisfy.
///
/// All operations are synchronous and read-only. Collections in this domain
/// are small (at most thousands of points per float), so queries return owned
/// vectors rather than streaming views. Implementations are not required to
/// return records in any particular order; the view filters re-establish the
/// orderings the adapters rely on.
pub trait MeasurementStore {
    /// Distinct float identifiers present in the store, sorted ascending.
    fn list_floats(&self) -> Vec<FloatId>;

    /// Distinct profile reference dates present in the store, sorted ascending.
    fn list_reference_dates(&self) -> Vec<NaiveDate>;

    /// All trajectory observations for one float.
    ///
    /// Unknown (or empty) ids yield an empty vector, never an error.
    fn trajectories_for(&self, float_id: &FloatId) -> Vec<FloatRecord>;

    /// All vertical-profile samples taken at one reference date.
    ///
    /// Unknown dates yield an empty vector, never an error.
    fn profile_for(&self, reference_date: NaiveDate) -> Vec<ProfileSample>;

    /// The full pre-aligned comparison table for the fixed float pair.
    fn comparison_table(&self) -> Vec<ComparisonSample>;
}
