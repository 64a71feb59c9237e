//! Utilities

pub mod format;
