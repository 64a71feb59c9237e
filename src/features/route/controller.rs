//! Route Controller
//!
//! Holds the selection and forwards each new one to the route display.

use crate::connection::RouteStyle;
use crate::domain::trip::Trip;
use crate::services::MapSurface;
use crate::state::selection_state::Selection;

use super::display::{RouteDisplay, RouteOutcome};

/// Selection and route overlay
pub struct RouteController<M: MapSurface> {
    selection: Selection,
    display: RouteDisplay<M>,
}

impl<M: MapSurface> RouteController<M> {
    pub fn new(map: M, style: RouteStyle) -> Self {
        Self {
            selection: Selection::new(),
            display: RouteDisplay::new(map, style),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn display(&self) -> &RouteDisplay<M> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut RouteDisplay<M> {
        &mut self.display
    }

    /// Record the new selection and redraw the route for it
    pub fn on_trip_selected(&mut self, trip: Trip) -> RouteOutcome {
        let outcome = self.display.show(&trip);
        self.selection = self.selection.select(trip);
        outcome
    }
}
