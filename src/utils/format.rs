//! Format - Display Formatting for the Trip Table

use crate::domain::trip::parse_timestamp;

/// Format a trip timestamp as `Jan 05, 2024, 03:04:05 PM`.
///
/// Unparseable input is shown as-is rather than hidden.
pub fn format_trip_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %d, %Y, %I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

/// Distance in miles with two decimals
pub fn format_distance(miles: Option<f64>) -> String {
    match miles {
        Some(m) => format!("{m:.2}"),
        None => "-".to_string(),
    }
}

/// Fare with a dollar sign, number printed as received (`12.5` → `$12.5`)
pub fn format_fare(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("${a}"),
        None => "$-".to_string(),
    }
}
