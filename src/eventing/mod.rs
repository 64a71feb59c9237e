//! Eventing - Channel Messages Between Tasks and Components

pub mod app_event;

pub use app_event::DashboardEvent;
