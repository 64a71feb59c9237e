//! Dashboard Constants
//!
//! Centralized defaults shared by the configuration layer and the components.

/// Remote trip API base URL
pub const DEFAULT_BASE_URL: &str = "https://yellow-taxi-delta.vercel.app/api/yellow-taxi";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "TAXI_DASH_BASE_URL";

/// HTTP request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Rows per listing page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Route line style
pub const ROUTE_COLOR: &str = "#a600ff";
pub const ROUTE_WEIGHT: f32 = 6.0;
pub const ROUTE_OPACITY: f32 = 0.7;

/// Padding (x, y) in pixels applied when fitting the viewport to a route
pub const FIT_PADDING: (u32, u32) = (50, 50);

/// Group label for trips whose pickup timestamp cannot be parsed
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Config and log file names
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";
pub const LOG_FILE_PREFIX: &str = "taxi-dash.log";

/// How long the headless runner waits for the initial fetches
pub const STARTUP_WAIT_SECS: u64 = 45;
