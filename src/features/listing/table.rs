//! Trip Table View Model
//!
//! Display-ready rows, column headers and footer text for the listing.

use crate::state::listing_state::ListingState;
use crate::utils::format::{format_distance, format_fare, format_trip_time};

/// Column headers, left to right
pub const COLUMNS: [&str; 7] = [
    "No",
    "Vendor",
    "Pickup Time",
    "Dropoff Time",
    "Distance (miles)",
    "Fare ($)",
    "Payment",
];

/// One formatted table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub number: u64,
    pub vendor: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance: String,
    pub fare: String,
    pub payment: String,
}

impl TableRow {
    /// Cells in column order
    pub fn cells(&self) -> [String; 7] {
        [
            self.number.to_string(),
            self.vendor.clone(),
            self.pickup.clone(),
            self.dropoff.clone(),
            self.distance.clone(),
            self.fare.clone(),
            self.payment.clone(),
        ]
    }
}

/// Format the current page of the listing
pub fn table_rows(state: &ListingState) -> Vec<TableRow> {
    state
        .rows()
        .iter()
        .enumerate()
        .map(|(index, trip)| TableRow {
            number: state.row_number(index),
            vendor: trip.vendor_id.clone(),
            pickup: format_trip_time(&trip.pickup_datetime),
            dropoff: format_trip_time(&trip.dropoff_datetime),
            distance: format_distance(trip.trip_distance),
            fare: format_fare(trip.fare_amount),
            payment: trip.payment_type.clone(),
        })
        .collect()
}

/// `Page X of Y`
pub fn page_label(state: &ListingState) -> String {
    format!("Page {} of {}", state.page(), state.total_pages())
}

/// `Sorted by fare amount, Descending`
pub fn sort_label(state: &ListingState) -> String {
    format!("Sorted by {}, {}", state.sort_key().label(), state.order().label())
}
