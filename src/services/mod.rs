//! Service Layer
//!
//! Abstraction over the external collaborators (the trip API and the map) and
//! the runtime their async work runs on.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      Dashboard                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌──────────────┐  │
//! │  │   Listing     │ │    Charts     │ │    Route     │  │
//! │  └──────┬────────┘ └──────┬────────┘ └──────┬───────┘  │
//! └─────────┼─────────────────┼─────────────────┼──────────┘
//!           ▼                 ▼                 ▼
//!      TripApi (runtime) ─ DashboardEvent ─►  MapSurface
//! ```

mod api;
mod map;
mod runtime;

pub use api::*;
pub use map::*;
pub use runtime::*;
