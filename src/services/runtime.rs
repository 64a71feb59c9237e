//! Fetch Runtime
//!
//! Components are driven synchronously by their owner while the trip API is
//! async. Every fetch runs on one shared tokio runtime and reports back
//! through the dashboard event channel, never through its join handle.
//!
//! ```text
//! controller.dispatch(msg) ──► spawn_fetch("listing-fetch", ..)
//!                                      │
//!                 DashboardEvent ◄─────┘
//!                       │
//!                       ▼
//!            Dashboard::pump_events()
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

static FETCH_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn fetch_runtime() -> &'static Runtime {
    FETCH_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("taxi-dash-io")
            .enable_all()
            .build()
            .expect("Failed to create fetch runtime")
    })
}

/// Run a fetch in the background; `task` only labels the trace output
pub fn spawn_fetch<F>(task: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Starting {}", task);
    fetch_runtime().spawn(async move {
        future.await;
        tracing::debug!("Finished {}", task);
    });
}
