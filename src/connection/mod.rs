//! Connection Settings
//!
//! Where the trip API lives and how the dashboard talks to it.

mod config;

pub use config::*;
