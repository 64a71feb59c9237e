//! DashboardEvent - Completion and Selection Events
//!
//! Everything that reaches a component from outside its own update call
//! travels as a `DashboardEvent` over the dashboard channel.

use crate::domain::trip::Trip;
use crate::state::chart_state::ChartsMsg;
use crate::state::listing_state::ListingMsg;

/// Events delivered to the dashboard owner
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Completion of a listing fetch
    Listing(ListingMsg),

    /// Completion of the full-collection fetch
    Charts(ChartsMsg),

    /// A listing row was chosen; carries a copy of the row
    TripSelected(Trip),
}

impl DashboardEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardEvent::Listing(ListingMsg::Loaded { .. }) => "listing-loaded",
            DashboardEvent::Listing(ListingMsg::Failed { .. }) => "listing-failed",
            DashboardEvent::Listing(_) => "listing",
            DashboardEvent::Charts(ChartsMsg::Loaded { .. }) => "charts-loaded",
            DashboardEvent::Charts(ChartsMsg::Failed { .. }) => "charts-failed",
            DashboardEvent::Charts(_) => "charts",
            DashboardEvent::TripSelected(_) => "trip-selected",
        }
    }
}
