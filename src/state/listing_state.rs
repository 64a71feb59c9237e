//! ListingState - Paginated, Sorted Trip Listing
//!
//! The state is an immutable snapshot. `reduce` is the only way to move from
//! one snapshot to the next, for user actions and fetch completions alike.
//! Whenever (page, sort key, order) changes it hands back exactly one
//! request to issue.

use std::sync::Arc;

use crate::domain::query::{ListingQuery, SortKey, SortOrder};
use crate::domain::trip::{Trip, TripPage};

/// Fetch status of the listing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListingStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(Arc<str>),
}

impl ListingStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListingStatus::Error(message) => Some(message.as_ref()),
            _ => None,
        }
    }
}

/// Inputs to the listing reducer
#[derive(Debug, Clone)]
pub enum ListingMsg {
    /// Component shown for the first time (or shown again)
    Mount,
    NextPage,
    PrevPage,
    GoToPage(u32),
    SetSortKey(SortKey),
    ToggleOrder,
    /// A fetch finished successfully
    Loaded { request_id: u64, page: TripPage },
    /// A fetch failed
    Failed { request_id: u64, message: String },
}

/// A fetch the owner must issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRequest {
    /// Monotonic id; completions carrying an older id are stale
    pub id: u64,
    pub query: ListingQuery,
}

/// Snapshot of the listing
#[derive(Debug, Clone)]
pub struct ListingState {
    page: u32,
    sort_key: SortKey,
    order: SortOrder,
    page_size: u32,
    total_records: u64,
    rows: Arc<Vec<Trip>>,
    status: ListingStatus,
    latest_request: u64,
}

impl ListingState {
    /// Fresh listing on page 1, sorted by fare amount, descending
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            sort_key: SortKey::default(),
            order: SortOrder::default(),
            page_size: page_size.max(1),
            total_records: 0,
            rows: Arc::new(Vec::new()),
            status: ListingStatus::Idle,
            latest_request: 0,
        }
    }

    // ==================== Getters ====================

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn rows(&self) -> &[Trip] {
        &self.rows
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// ceil(total records / page size)
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_records.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Highest page navigation may reach; page 1 while the total is unknown
    fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Offset of the first row of the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// 1-based position of a displayed row within the whole listing
    pub fn row_number(&self, index: usize) -> u64 {
        self.offset() + index as u64 + 1
    }

    pub fn query(&self) -> ListingQuery {
        ListingQuery {
            sort_by: self.sort_key,
            order: self.order,
            limit: self.page_size,
            offset: self.offset(),
        }
    }

    fn fetch_key(&self) -> (u32, SortKey, SortOrder) {
        (self.page, self.sort_key, self.order)
    }

    // ==================== Update ====================

    /// Compute the next snapshot and the request it requires, if any
    pub fn reduce(&self, msg: ListingMsg) -> (Self, Option<ListingRequest>) {
        let mut next = self.clone();

        match msg {
            ListingMsg::Mount => return next.issue(),
            ListingMsg::NextPage => {
                next.page = self.page.saturating_add(1).min(self.last_page());
            }
            ListingMsg::PrevPage => {
                next.page = self.page.saturating_sub(1).max(1);
            }
            ListingMsg::GoToPage(page) => {
                next.page = page.clamp(1, self.last_page());
            }
            ListingMsg::SetSortKey(key) => {
                next.sort_key = key;
            }
            ListingMsg::ToggleOrder => {
                next.order = self.order.toggle();
            }
            ListingMsg::Loaded { request_id, page } => {
                if self.is_stale(request_id) {
                    return (next, None);
                }
                let mut trips = page.trips;
                if trips.len() > self.page_size as usize {
                    tracing::warn!(
                        "Server returned {} rows for a page of {}; truncating",
                        trips.len(),
                        self.page_size
                    );
                    trips.truncate(self.page_size as usize);
                }
                next.rows = Arc::new(trips);
                next.total_records = page.total_records;
                next.status = ListingStatus::Loaded;
                return (next, None);
            }
            ListingMsg::Failed {
                request_id,
                message,
            } => {
                if self.is_stale(request_id) {
                    return (next, None);
                }
                // Prior rows stay on screen under the error.
                next.status = ListingStatus::Error(message.into());
                return (next, None);
            }
        }

        if next.fetch_key() == self.fetch_key() {
            (next, None)
        } else {
            next.issue()
        }
    }

    fn is_stale(&self, request_id: u64) -> bool {
        if request_id != self.latest_request {
            tracing::debug!(
                "Dropping stale listing response {} (latest is {})",
                request_id,
                self.latest_request
            );
            return true;
        }
        false
    }

    fn issue(mut self) -> (Self, Option<ListingRequest>) {
        self.latest_request += 1;
        self.status = ListingStatus::Loading;
        let request = ListingRequest {
            id: self.latest_request,
            query: self.query(),
        };
        (self, Some(request))
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PAGE_SIZE)
    }
}
