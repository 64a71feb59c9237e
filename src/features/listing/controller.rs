//! Listing Controller
//!
//! Owns the listing snapshot, runs it through the reducer and issues the
//! sorted fetch each reduction asks for. Completions come back as
//! `DashboardEvent::Listing` and go through the same reducer.

use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::domain::trip::Trip;
use crate::eventing::DashboardEvent;
use crate::services::{TripApi, spawn_fetch};
use crate::state::listing_state::{ListingMsg, ListingRequest, ListingState};

/// Listing page controller
pub struct ListingController<A: TripApi> {
    api: Arc<A>,
    tx: Sender<DashboardEvent>,
    state: ListingState,
}

impl<A: TripApi> ListingController<A> {
    /// Create a new controller
    pub fn new(api: Arc<A>, tx: Sender<DashboardEvent>, page_size: u32) -> Self {
        Self {
            api,
            tx,
            state: ListingState::new(page_size),
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Apply a message and issue the fetch it requires
    pub fn dispatch(&mut self, msg: ListingMsg) {
        let failed = matches!(msg, ListingMsg::Failed { .. });
        let (next, request) = self.state.reduce(msg);
        self.state = next;

        if let Some(error) = self.state.status().error().filter(|_| failed) {
            tracing::warn!("Listing error: {}", error);
        }
        if let Some(request) = request {
            self.issue_fetch(request);
        }
    }

    /// Copy row `index` of the current page and emit it as the selection.
    ///
    /// Returns `false` when there is no such row.
    pub fn select_row(&self, index: usize) -> bool {
        let Some(row) = self.state.rows().get(index) else {
            tracing::debug!("No row {} on page {}", index, self.state.page());
            return false;
        };
        let trip: Trip = row.clone();
        self.tx.send(DashboardEvent::TripSelected(trip)).is_ok()
    }

    fn issue_fetch(&self, request: ListingRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tracing::info!(
            "Fetching listing #{}: sortBy={} order={} limit={} offset={}",
            request.id,
            request.query.sort_by,
            request.query.order,
            request.query.limit,
            request.query.offset
        );

        spawn_fetch("listing-fetch", async move {
            let msg = match api.fetch_sorted(&request.query).await {
                Ok(page) => ListingMsg::Loaded {
                    request_id: request.id,
                    page,
                },
                Err(e) => ListingMsg::Failed {
                    request_id: request.id,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(DashboardEvent::Listing(msg));
        });
    }
}
