//! Features - One Module per Dashboard Component
//!
//! Each feature has a controller that owns its state snapshot and talks to
//! the service layer.

pub mod charts;
pub mod listing;
pub mod route;
