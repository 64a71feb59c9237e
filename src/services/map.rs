//! Map Surface
//!
//! The map widget and its routing engine are external. `MapSurface` is the
//! narrow seam the route display talks to; `HeadlessMap` is the in-process
//! surface used by the binary and by tests. It records every overlay and logs
//! what a real map would draw.

use std::fmt;

use uuid::Uuid;

use crate::connection::RouteStyle;
use crate::domain::geo::{Bounds, LatLng, Padding};
use crate::error::{Error, Result};

/// Handle of a route overlay drawn on a map
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct RouteId(Uuid);

impl RouteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RouteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A route to compute and draw between two waypoints
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub from: LatLng,
    pub to: LatLng,
    pub style: RouteStyle,
}

/// Operations the route display needs from a map
pub trait MapSurface {
    /// Add a routing control; the engine computes the path on its own
    fn add_route(&mut self, request: RouteRequest) -> Result<RouteId>;

    /// Drop the waypoints of a route so the engine stops recomputing it
    fn clear_waypoints(&mut self, id: RouteId) -> Result<()>;

    /// Remove a route and everything drawn for it
    fn remove_route(&mut self, id: RouteId) -> Result<()>;

    /// Routes currently present on the map
    fn route_ids(&self) -> Vec<RouteId>;

    /// Move the viewport so `bounds` is visible with `padding` around it
    fn fit_bounds(&mut self, bounds: Bounds, padding: Padding);
}

/// A route as recorded by [`HeadlessMap`]
#[derive(Clone, Debug)]
pub struct DrawnRoute {
    pub id: RouteId,
    pub request: RouteRequest,
    pub waypoints_cleared: bool,
}

/// Last viewport fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub bounds: Bounds,
    pub padding: Padding,
}

/// In-process map surface
#[derive(Debug, Default)]
pub struct HeadlessMap {
    routes: Vec<DrawnRoute>,
    viewport: Option<Viewport>,
    failing_removals: u32,
    added_total: u64,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` removals fail, as a misbehaving control would
    pub fn fail_next_removals(&mut self, count: u32) {
        self.failing_removals = count;
    }

    pub fn routes(&self) -> &[DrawnRoute] {
        &self.routes
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Number of routes ever added
    pub fn added_total(&self) -> u64 {
        self.added_total
    }

    fn position(&self, id: RouteId) -> Result<usize> {
        self.routes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::Map {
                message: format!("route {id} is not on the map"),
            })
    }
}

impl MapSurface for HeadlessMap {
    fn add_route(&mut self, request: RouteRequest) -> Result<RouteId> {
        let id = RouteId::new();
        tracing::info!(
            "Route {}: ({:.5}, {:.5}) -> ({:.5}, {:.5}) color={} weight={}",
            id,
            request.from.lat,
            request.from.lng,
            request.to.lat,
            request.to.lng,
            request.style.color,
            request.style.weight,
        );
        self.routes.push(DrawnRoute {
            id,
            request,
            waypoints_cleared: false,
        });
        self.added_total += 1;
        Ok(id)
    }

    fn clear_waypoints(&mut self, id: RouteId) -> Result<()> {
        let index = self.position(id)?;
        self.routes[index].waypoints_cleared = true;
        Ok(())
    }

    fn remove_route(&mut self, id: RouteId) -> Result<()> {
        if self.failing_removals > 0 {
            self.failing_removals -= 1;
            return Err(Error::Map {
                message: format!("control for route {id} refused removal"),
            });
        }
        let index = self.position(id)?;
        self.routes.remove(index);
        tracing::debug!("Route {} removed", id);
        Ok(())
    }

    fn route_ids(&self) -> Vec<RouteId> {
        self.routes.iter().map(|r| r.id).collect()
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding: Padding) {
        tracing::debug!("Fit viewport to {:?} with padding {:?}", bounds, padding);
        self.viewport = Some(Viewport { bounds, padding });
    }
}
