//! Charts Controller
//!
//! Fetches the whole trip collection on mount and reduces it into the three
//! chart series off the caller's thread. Failures are logged, never shown.

use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::domain::aggregation::TripAggregates;
use crate::eventing::DashboardEvent;
use crate::services::{TripApi, spawn_fetch};
use crate::state::chart_state::{ChartsMsg, ChartsState};

/// Charts panel controller
pub struct ChartsController<A: TripApi> {
    api: Arc<A>,
    tx: Sender<DashboardEvent>,
    state: ChartsState,
}

impl<A: TripApi> ChartsController<A> {
    /// Create a new controller
    pub fn new(api: Arc<A>, tx: Sender<DashboardEvent>) -> Self {
        Self {
            api,
            tx,
            state: ChartsState::new(),
        }
    }

    pub fn state(&self) -> &ChartsState {
        &self.state
    }

    /// Apply a message and start the full fetch if it asks for one
    pub fn dispatch(&mut self, msg: ChartsMsg) {
        let (next, request) = self.state.reduce(msg);
        self.state = next;
        if let Some(request_id) = request {
            self.issue_fetch(request_id);
        }
    }

    fn issue_fetch(&self, request_id: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        spawn_fetch("charts-fetch", async move {
            let msg = match api.fetch_all().await {
                Ok(trips) => {
                    let aggregates = TripAggregates::compute(&trips);
                    tracing::info!(
                        "Aggregated {} trips: {} payment types, {} months, {} vendors",
                        aggregates.trip_count,
                        aggregates.revenue_by_payment.len(),
                        aggregates.trips_by_month.len(),
                        aggregates.trips_by_vendor.len()
                    );
                    ChartsMsg::Loaded {
                        request_id,
                        aggregates,
                    }
                }
                Err(e) => {
                    tracing::error!("Error fetching taxi data: {}", e);
                    ChartsMsg::Failed { request_id }
                }
            };
            let _ = tx.send(DashboardEvent::Charts(msg));
        });
    }
}
