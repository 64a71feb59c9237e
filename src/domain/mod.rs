//! Domain - Pure Data Structures
//!
//! Trip records, query parameters, aggregation and geometry. Nothing here
//! touches the network or the map.

pub mod aggregation;
pub mod chart;
pub mod geo;
pub mod query;
pub mod trip;
