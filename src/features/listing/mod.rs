//! Listing Feature - Paginated, Sortable Trip Table

pub mod controller;
pub mod table;

pub use controller::ListingController;
