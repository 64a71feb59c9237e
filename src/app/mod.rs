//! Application Layer
//!
//! The dashboard container that wires components to the event channel.

pub mod dashboard;

pub use dashboard::Dashboard;
