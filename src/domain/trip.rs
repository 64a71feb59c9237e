//! Trip - Yellow Taxi Trip Record
//!
//! The API is loose about types: amounts and coordinates arrive either as JSON
//! numbers or as numeric text, ids sometimes as numbers. Everything is coerced
//! once at deserialization time so the rest of the crate sees one shape.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::geo::LatLng;

/// One taxi ride as returned by the trip API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default, deserialize_with = "loose_text")]
    pub vendor_id: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub pickup_datetime: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub dropoff_datetime: String,
    #[serde(default, deserialize_with = "loose_number")]
    pub passenger_count: Option<f64>,
    /// Miles
    #[serde(default, deserialize_with = "loose_number")]
    pub trip_distance: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub pickup_longitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub pickup_latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub dropoff_longitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub dropoff_latitude: Option<f64>,
    #[serde(default, deserialize_with = "loose_text")]
    pub payment_type: String,
    #[serde(default, deserialize_with = "loose_number")]
    pub fare_amount: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub mta_tax: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub tip_amount: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub tolls_amount: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "loose_number")]
    pub imp_surcharge: Option<f64>,
    #[serde(default, deserialize_with = "loose_text")]
    pub rate_code: String,
}

/// One page of the sorted listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPage {
    pub trips: Vec<Trip>,
    /// Size of the whole backing set, not of this page
    pub total_records: u64,
}

impl Trip {
    /// Pickup coordinate, if both components are numeric
    pub fn pickup(&self) -> Option<LatLng> {
        LatLng::checked(self.pickup_latitude?, self.pickup_longitude?)
    }

    /// Dropoff coordinate, if both components are numeric
    pub fn dropoff(&self) -> Option<LatLng> {
        LatLng::checked(self.dropoff_latitude?, self.dropoff_longitude?)
    }

    /// Both route endpoints, or `None` when any coordinate is missing
    pub fn route_endpoints(&self) -> Option<(LatLng, LatLng)> {
        Some((self.pickup()?, self.dropoff()?))
    }

    pub fn pickup_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.pickup_datetime)
    }

    pub fn dropoff_time(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.dropoff_datetime)
    }
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse the timestamp shapes the API has been seen to emit.
///
/// Offset-bearing values keep their own wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Anything the API may put where a number or a label is expected
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// Numeric text becomes a number; null, missing, empty and junk become `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) if n.is_finite() => Some(n),
        Some(Loose::Text(s)) => coerce_number(&s),
        _ => None,
    })
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => s,
        Some(Loose::Number(n)) => n.to_string(),
        Some(Loose::Flag(b)) => b.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn numeric_text_is_coerced() {
        let trip: Trip = serde_json::from_value(json!({
            "vendor_id": 2,
            "payment_type": "CASH",
            "total_amount": "10.00",
            "fare_amount": 7.5,
            "pickup_latitude": "40.7614",
            "pickup_longitude": -73.9776,
            "dropoff_latitude": null,
            "trip_distance": "n/a",
        }))
        .expect("trip");

        assert_eq!(trip.vendor_id, "2");
        assert_eq!(trip.total_amount, Some(10.0));
        assert_eq!(trip.fare_amount, Some(7.5));
        assert_eq!(trip.pickup_latitude, Some(40.7614));
        assert_eq!(trip.dropoff_latitude, None);
        assert_eq!(trip.dropoff_longitude, None);
        assert_eq!(trip.trip_distance, None);
        assert!(trip.rate_code.is_empty());
    }

    #[test]
    fn route_endpoints_need_all_four_coordinates() {
        let mut trip = Trip {
            pickup_latitude: Some(40.76),
            pickup_longitude: Some(-73.97),
            dropoff_latitude: Some(40.64),
            dropoff_longitude: Some(-73.78),
            ..Default::default()
        };
        assert!(trip.route_endpoints().is_some());

        trip.dropoff_longitude = None;
        assert!(trip.pickup().is_some());
        assert!(trip.route_endpoints().is_none());
    }

    #[test]
    fn timestamps_in_several_shapes() {
        let iso = parse_timestamp("2024-03-05T14:07:09.000Z").expect("iso");
        assert_eq!((iso.month(), iso.day(), iso.hour()), (3, 5, 14));

        let plain = parse_timestamp("2024-11-30 23:59:01").expect("plain");
        assert_eq!((plain.month(), plain.second()), (11, 1));

        let date_only = parse_timestamp("2024-07-04").expect("date");
        assert_eq!(date_only.month(), 7);

        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
