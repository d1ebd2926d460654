//! Trip exclusion, decided before normalization.

use std::collections::HashSet;

use crate::domain::TripRecord;

/// Headsign the feed uses for deadhead trips.
pub const NOT_IN_SERVICE: &str = "NOT IN SERVICE";

/// Decides which trips never reach the normalizer.
///
/// With no active set, only deadheads are dropped. With an active set, a
/// trip must also run under one of its service ids; an empty set therefore
/// excludes everything.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    active_service_ids: Option<HashSet<String>>,
}

impl TripFilter {
    pub fn new(active_service_ids: Option<HashSet<String>>) -> Self {
        Self { active_service_ids }
    }

    pub fn is_excluded(&self, trip: &TripRecord) -> bool {
        if trip.raw_headsign == NOT_IN_SERVICE {
            return true;
        }
        match (&self.active_service_ids, &trip.service_id) {
            (None, _) => false,
            (Some(active), Some(service_id)) => !active.contains(service_id),
            (Some(_), None) => true,
        }
    }

    /// True when every trip will be excluded.
    pub fn excludes_all(&self) -> bool {
        self.active_service_ids
            .as_ref()
            .is_some_and(HashSet::is_empty)
    }
}
