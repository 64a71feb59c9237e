//! Taxi Dash Core Library
//!
//! Listing, aggregation and route display for the yellow taxi trip
//! dashboard. Trip data comes from a remote read-only API; the map and its
//! routing engine sit behind the `MapSurface` trait.

pub mod app;
pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;
