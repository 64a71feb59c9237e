#![allow(dead_code)]

use std::cmp::Ordering;
use std::sync::Mutex;

use taxi_dash::domain::query::{ListingQuery, SortKey, SortOrder};
use taxi_dash::domain::trip::{Trip, TripPage};
use taxi_dash::error::{Error, Result};
use taxi_dash::services::TripApi;

/// In-memory trip API with the same sorting and paging contract as the server
#[derive(Default)]
pub struct MemoryTripApi {
    trips: Vec<Trip>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryTripApi {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self {
            trips,
            ..Default::default()
        }
    }

    /// Every later call fails with `success: false` and this message
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut slot) = self.fail_with.lock() {
            *slot = Some(message.to_string());
        }
    }

    fn failure(&self) -> Option<Error> {
        self.fail_with
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
            .map(|message| Error::Api { message })
    }
}

fn compare(a: &Trip, b: &Trip, key: SortKey) -> Ordering {
    let number = |x: Option<f64>, y: Option<f64>| {
        x.unwrap_or(f64::MIN).total_cmp(&y.unwrap_or(f64::MIN))
    };
    match key {
        SortKey::PickupDatetime => a.pickup_datetime.cmp(&b.pickup_datetime),
        SortKey::FareAmount => number(a.fare_amount, b.fare_amount),
        SortKey::TripDistance => number(a.trip_distance, b.trip_distance),
        SortKey::PaymentType => a.payment_type.cmp(&b.payment_type),
    }
}

impl TripApi for MemoryTripApi {
    async fn fetch_all(&self) -> Result<Vec<Trip>> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        Ok(self.trips.clone())
    }

    async fn fetch_sorted(&self, query: &ListingQuery) -> Result<TripPage> {
        if let Some(err) = self.failure() {
            return Err(err);
        }

        let mut sorted = self.trips.clone();
        sorted.sort_by(|a, b| compare(a, b, query.sort_by));
        if query.order == SortOrder::Desc {
            sorted.reverse();
        }

        let trips = sorted
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();

        Ok(TripPage {
            trips,
            total_records: self.trips.len() as u64,
        })
    }
}

/// `n` trips in Manhattan with distinct fares, spread over three months
pub fn sample_trips(n: usize) -> Vec<Trip> {
    let payments = ["CARD", "CASH", "CARD", "NO CHARGE"];
    (0..n)
        .map(|i| Trip {
            vendor_id: format!("{}", i % 2 + 1),
            pickup_datetime: format!("2024-{:02}-{:02} 08:{:02}:00", i % 3 + 1, i % 28 + 1, i % 60),
            dropoff_datetime: format!("2024-{:02}-{:02} 09:{:02}:00", i % 3 + 1, i % 28 + 1, i % 60),
            passenger_count: Some(1.0),
            trip_distance: Some(1.0 + i as f64 * 0.3),
            pickup_latitude: Some(40.70 + i as f64 * 0.001),
            pickup_longitude: Some(-74.01 + i as f64 * 0.001),
            dropoff_latitude: Some(40.78),
            dropoff_longitude: Some(-73.96),
            payment_type: payments[i % payments.len()].to_string(),
            fare_amount: Some(5.0 + i as f64),
            total_amount: Some(7.5 + i as f64),
            rate_code: "1".to_string(),
            ..Default::default()
        })
        .collect()
}
