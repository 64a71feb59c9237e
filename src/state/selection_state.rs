//! Selection - The Trip Chosen in the Listing

use crate::domain::trip::Trip;

/// At most one selected trip. Starts empty and is never cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    trip: Option<Trip>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with `trip` selected, replacing any earlier selection
    pub fn select(&self, trip: Trip) -> Self {
        Self { trip: Some(trip) }
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.trip.is_some()
    }
}
