//! Route Feature - Selected Trip on the Map

pub mod controller;
pub mod display;

pub use controller::RouteController;
pub use display::{RouteDisplay, RouteOutcome};
