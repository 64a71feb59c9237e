//! Dashboard - Component Container and Event Pump
//!
//! The dashboard owns the three components and the receiving end of the
//! event channel. Fetch tasks and row selection push `DashboardEvent`s; the
//! owner drains them with `pump_events` (or blocks on `wait_event`) and each
//! event is dispatched to the component it belongs to.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::connection::DashboardConfig;
use crate::eventing::DashboardEvent;
use crate::features::charts::ChartsController;
use crate::features::listing::ListingController;
use crate::features::route::RouteController;
use crate::services::{MapSurface, TripApi};
use crate::state::chart_state::ChartsMsg;
use crate::state::listing_state::ListingMsg;

/// The three dashboard components sharing one trip API and one event channel
pub struct Dashboard<A: TripApi, M: MapSurface> {
    listing: ListingController<A>,
    charts: ChartsController<A>,
    route: RouteController<M>,
    rx: Receiver<DashboardEvent>,
}

impl<A: TripApi, M: MapSurface> Dashboard<A, M> {
    pub fn new(api: A, map: M, config: &DashboardConfig) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        let api = Arc::new(api);

        Self {
            listing: ListingController::new(Arc::clone(&api), tx.clone(), config.listing.page_size),
            charts: ChartsController::new(api, tx),
            route: RouteController::new(map, config.route.clone()),
            rx,
        }
    }

    /// Show the dashboard: first listing page and the full-collection charts
    pub fn mount(&mut self) {
        tracing::info!("Mounting dashboard");
        self.listing.dispatch(ListingMsg::Mount);
        self.charts.dispatch(ChartsMsg::Mount);
    }

    pub fn listing(&self) -> &ListingController<A> {
        &self.listing
    }

    pub fn charts(&self) -> &ChartsController<A> {
        &self.charts
    }

    pub fn route(&self) -> &RouteController<M> {
        &self.route
    }

    pub fn route_mut(&mut self) -> &mut RouteController<M> {
        &mut self.route
    }

    /// Forward a user action to the listing
    pub fn dispatch(&mut self, msg: ListingMsg) {
        self.listing.dispatch(msg);
    }

    /// Select row `index` of the current page; applied on the next pump
    pub fn select_row(&mut self, index: usize) -> bool {
        self.listing.select_row(index)
    }

    /// Apply every event already waiting. Returns how many were applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Block until one event arrives (or `timeout` passes), then drain the rest
    pub fn wait_event(&mut self, timeout: Duration) -> usize {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event);
                1 + self.pump_events()
            }
            Err(RecvTimeoutError::Timeout) => 0,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Dashboard event channel disconnected");
                0
            }
        }
    }

    /// Pump events until neither the listing nor the charts are loading
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.pump_events();
        while self.is_loading() {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            self.wait_event(deadline - now);
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.listing.state().status().is_loading() || self.charts.state().is_loading()
    }

    fn handle_event(&mut self, event: DashboardEvent) {
        tracing::debug!("Dashboard event: {}", event.kind());
        match event {
            DashboardEvent::Listing(msg) => self.listing.dispatch(msg),
            DashboardEvent::Charts(msg) => self.charts.dispatch(msg),
            DashboardEvent::TripSelected(trip) => {
                let outcome = self.route.on_trip_selected(trip);
                tracing::debug!("Route outcome: {:?}", outcome);
            }
        }
    }
}
