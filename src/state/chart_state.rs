//! ChartsState - Aggregated Series for the Charts Panel

use std::sync::Arc;

use crate::domain::aggregation::TripAggregates;
use crate::domain::chart::ChartData;

/// Inputs to the charts reducer
#[derive(Debug, Clone)]
pub enum ChartsMsg {
    /// Panel shown; always refetches the whole collection
    Mount,
    Loaded {
        request_id: u64,
        aggregates: TripAggregates,
    },
    Failed {
        request_id: u64,
    },
}

/// Snapshot of the charts panel
#[derive(Debug, Clone, Default)]
pub struct ChartsState {
    aggregates: Option<Arc<TripAggregates>>,
    loading: bool,
    latest_request: u64,
}

impl ChartsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregates(&self) -> Option<&TripAggregates> {
        self.aggregates.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Chart descriptors, once the series have been computed
    pub fn charts(&self) -> Option<[ChartData; 3]> {
        self.aggregates().map(ChartData::panel)
    }

    /// Compute the next snapshot; `Some(id)` means a full fetch must be issued
    pub fn reduce(&self, msg: ChartsMsg) -> (Self, Option<u64>) {
        let mut next = self.clone();
        match msg {
            ChartsMsg::Mount => {
                // Series are rebuilt from scratch on every mount.
                next.aggregates = None;
                next.latest_request += 1;
                next.loading = true;
                let id = next.latest_request;
                (next, Some(id))
            }
            ChartsMsg::Loaded {
                request_id,
                aggregates,
            } => {
                if request_id == self.latest_request {
                    next.aggregates = Some(Arc::new(aggregates));
                    next.loading = false;
                }
                (next, None)
            }
            ChartsMsg::Failed { request_id } => {
                // Failure is only logged; the series stay unset.
                if request_id == self.latest_request {
                    next.loading = false;
                }
                (next, None)
            }
        }
    }
}
