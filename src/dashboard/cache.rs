use std::collections::HashMap;

use crate::selection::SelectionSnapshot;
use crate::series::Series;

/// Upper bound on retained entries. A dashboard session touches a handful of
/// selections; the clamp only guards against pathological selector churn.
const MAX_ENTRIES: usize = 64;

/// Memo of the last computed series set per selection snapshot.
///
/// Filters and adapters are pure, so a snapshot fully determines its series
/// set; entries stay valid until the backing store is replaced, at which
/// point the controller clears the cache.
#[derive(Debug, Default)]
pub(super) struct SeriesCache {
    entries: HashMap<SelectionSnapshot, Vec<Series>>,
}

impl SeriesCache {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn get(&self, snapshot: &SelectionSnapshot) -> Option<&Vec<Series>> {
        self.entries.get(snapshot)
    }

    pub(super) fn insert(&mut self, snapshot: SelectionSnapshot, series: Vec<Series>) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(snapshot, series);
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
