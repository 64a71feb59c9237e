//! Route Display
//!
//! Keeps at most one route overlay on the map. Every new selection tears the
//! previous overlay down before anything is drawn; teardown failures are
//! logged and swallowed.

use crate::connection::RouteStyle;
use crate::domain::geo::Bounds;
use crate::domain::trip::Trip;
use crate::services::{MapSurface, RouteId, RouteRequest};

/// What `show` did with a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Drawn(RouteId),
    /// Coordinates missing or not numeric; nothing drawn
    InvalidCoordinates,
    /// The routing control could not be added
    Failed,
}

/// Route overlay on a map surface
pub struct RouteDisplay<M: MapSurface> {
    map: M,
    style: RouteStyle,
    current: Option<RouteId>,
}

impl<M: MapSurface> RouteDisplay<M> {
    pub fn new(map: M, style: RouteStyle) -> Self {
        Self {
            map,
            style,
            current: None,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Route currently drawn by this display
    pub fn current(&self) -> Option<RouteId> {
        self.current
    }

    /// Replace whatever is drawn with the route of `trip`
    pub fn show(&mut self, trip: &Trip) -> RouteOutcome {
        self.clear();

        let Some((from, to)) = trip.route_endpoints() else {
            tracing::error!(
                "Invalid coordinates: pickup=({:?}, {:?}) dropoff=({:?}, {:?})",
                trip.pickup_latitude,
                trip.pickup_longitude,
                trip.dropoff_latitude,
                trip.dropoff_longitude
            );
            return RouteOutcome::InvalidCoordinates;
        };

        let request = RouteRequest {
            from,
            to,
            style: self.style.clone(),
        };
        let id = match self.map.add_route(request) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to add route: {}", e);
                return RouteOutcome::Failed;
            }
        };
        self.current = Some(id);

        self.map
            .fit_bounds(Bounds::from_points(from, to), self.style.padding);

        RouteOutcome::Drawn(id)
    }

    /// Remove the current route and any route left behind on the map
    pub fn clear(&mut self) {
        if let Some(id) = self.current.take() {
            self.remove_quietly(id);
        }

        // A control that refused removal earlier may still be on the map.
        for id in self.map.route_ids() {
            self.remove_quietly(id);
        }
    }

    fn remove_quietly(&mut self, id: RouteId) {
        if let Err(e) = self.map.clear_waypoints(id) {
            tracing::warn!("Error while clearing waypoints of route {}: {}", id, e);
        }
        if let Err(e) = self.map.remove_route(id) {
            tracing::warn!("Error while removing route {}: {}", id, e);
        }
    }
}

impl<M: MapSurface> Drop for RouteDisplay<M> {
    fn drop(&mut self) {
        self.clear();
    }
}
