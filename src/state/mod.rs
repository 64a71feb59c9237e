//! State - Component State Snapshots
//!
//! One module per component. Each state is a cloneable snapshot updated by a
//! single reducer, so a component never mutates shared state in place.

pub mod chart_state;
pub mod listing_state;
pub mod selection_state;
