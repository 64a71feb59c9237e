//! Taxi Dash - Headless Entry Point
//!
//! Loads the dashboard configuration, mounts the three components against the
//! live trip API, and logs the first listing page, the chart series and the
//! route of the first row.

use std::time::Duration;

use anyhow::{Context, Result};
use taxi_dash::app::Dashboard;
use taxi_dash::connection::{load_config, write_default_config};
use taxi_dash::constants::{LOG_FILE_PREFIX, STARTUP_WAIT_SECS};
use taxi_dash::features::listing::table::{COLUMNS, page_label, sort_label, table_rows};
use taxi_dash::helpers::get_or_create_data_dir;
use taxi_dash::services::{HeadlessMap, HttpTripApi};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // File logging is best-effort; stdout logging always works.
    let file = get_or_create_data_dir().ok().map(|dir| {
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        tracing_appender::non_blocking(appender)
    });

    match file {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
            None
        }
    }
}

fn main() -> Result<()> {
    let _guard = init_tracing();

    tracing::info!("Starting Taxi Dash...");

    if let Err(e) = write_default_config() {
        tracing::warn!("Could not write default config: {}", e);
    }

    let config = load_config().context("loading dashboard config")?;
    let api = HttpTripApi::new(&config.api).context("building trip API client")?;
    tracing::info!("Trip API: {}", api.base_url());

    let mut dashboard = Dashboard::new(api, HeadlessMap::new(), &config);
    dashboard.mount();

    if !dashboard.settle(Duration::from_secs(STARTUP_WAIT_SECS)) {
        tracing::warn!("Timed out waiting for the initial fetches");
    }

    let listing = dashboard.listing().state();
    if let Some(error) = listing.status().error() {
        tracing::error!("Listing failed: {}", error);
    }

    tracing::info!("{} | {}", sort_label(listing), page_label(listing));
    tracing::info!("{}", COLUMNS.join(" | "));
    for row in table_rows(listing) {
        tracing::info!("{}", row.cells().join(" | "));
    }

    match dashboard.charts().state().charts() {
        Some(charts) => {
            for chart in charts {
                let points: Vec<String> = chart
                    .labels
                    .iter()
                    .zip(&chart.values)
                    .map(|(label, value)| format!("{label}={value:.2}"))
                    .collect();
                tracing::info!("{}: {}", chart.title, points.join(", "));
            }
        }
        None => tracing::info!("Charts unavailable"),
    }

    if dashboard.select_row(0) {
        dashboard.pump_events();
        let map = dashboard.route().display().map();
        match map.viewport() {
            Some(viewport) => tracing::info!("Route viewport: {:?}", viewport.bounds),
            None => tracing::info!("No route drawn for the first row"),
        }
    }

    Ok(())
}
