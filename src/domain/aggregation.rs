//! Aggregation - Chart Series Reduced from the Full Trip Collection
//!
//! Each reduction is a single pass over the collection that groups trips by a
//! key and folds every group into one number. Group order is the order in
//! which keys are first met, never sorted.

use ahash::RandomState;
use hashlink::LinkedHashMap;
use hashlink::linked_hash_map::Entry;

use super::trip::Trip;
use crate::constants::INVALID_DATE_LABEL;

/// Ordered (labels, values) pair consumed by a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series<V> {
    labels: Vec<String>,
    values: Vec<V>,
}

impl<V> Series<V> {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Value for a label
    pub fn get(&self, label: &str) -> Option<&V> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| &self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.labels.iter().map(String::as_str).zip(self.values.iter())
    }
}

impl<V: Copy + std::iter::Sum<V>> Series<V> {
    /// Sum over all groups
    pub fn total(&self) -> V {
        self.values.iter().copied().sum()
    }
}

impl<V> FromIterator<(String, V)> for Series<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Group trips by `key` and fold each group with `fold`, keeping first-seen order
fn reduce_by<V, K, F>(trips: &[Trip], key: K, mut fold: F) -> Series<V>
where
    V: Default,
    K: Fn(&Trip) -> String,
    F: FnMut(&mut V, &Trip),
{
    let mut groups: LinkedHashMap<String, V, RandomState> =
        LinkedHashMap::with_hasher(RandomState::new());

    for trip in trips {
        // `or_insert_with` would move an existing group to the back.
        let slot = match groups.entry(key(trip)) {
            Entry::Occupied(group) => group.into_mut(),
            Entry::Vacant(group) => group.insert(V::default()),
        };
        fold(slot, trip);
    }

    groups.into_iter().collect()
}

/// Payment type → sum of total amount. Non-numeric totals add nothing.
pub fn revenue_by_payment(trips: &[Trip]) -> Series<f64> {
    reduce_by(
        trips,
        |trip| trip.payment_type.clone(),
        |sum, trip| *sum += trip.total_amount.unwrap_or(0.0),
    )
}

/// Short month name of the pickup time → trip count
pub fn trips_by_month(trips: &[Trip]) -> Series<u64> {
    reduce_by(trips, month_label, |count, _| *count += 1)
}

/// Vendor id → trip count
pub fn trips_by_vendor(trips: &[Trip]) -> Series<u64> {
    reduce_by(trips, |trip| trip.vendor_id.clone(), |count, _| *count += 1)
}

fn month_label(trip: &Trip) -> String {
    trip.pickup_time()
        .map(|t| t.format("%b").to_string())
        .unwrap_or_else(|| INVALID_DATE_LABEL.to_string())
}

/// The three series shown on the charts panel
#[derive(Debug, Clone, PartialEq)]
pub struct TripAggregates {
    pub revenue_by_payment: Series<f64>,
    pub trips_by_month: Series<u64>,
    pub trips_by_vendor: Series<u64>,
    /// Size of the collection the series were computed from
    pub trip_count: usize,
}

impl TripAggregates {
    pub fn compute(trips: &[Trip]) -> Self {
        Self {
            revenue_by_payment: revenue_by_payment(trips),
            trips_by_month: trips_by_month(trips),
            trips_by_vendor: trips_by_vendor(trips),
            trip_count: trips.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paid(payment: &str, total: Option<f64>) -> Trip {
        Trip {
            payment_type: payment.to_string(),
            total_amount: total,
            ..Default::default()
        }
    }

    fn picked_up(at: &str, vendor: &str) -> Trip {
        Trip {
            pickup_datetime: at.to_string(),
            vendor_id: vendor.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn revenue_groups_in_first_seen_order() {
        let trips = vec![
            paid("CASH", Some(10.0)),
            paid("CARD", Some(5.5)),
            paid("CASH", Some(2.0)),
        ];

        let series = revenue_by_payment(&trips);
        assert_eq!(series.labels(), ["CASH", "CARD"]);
        assert!((series.get("CASH").copied().unwrap_or_default() - 12.0).abs() < 1e-9);
        assert!((series.get("CARD").copied().unwrap_or_default() - 5.5).abs() < 1e-9);
    }

    #[test]
    fn revenue_total_matches_collection_total() {
        let trips = vec![
            paid("CARD", Some(17.3)),
            paid("CASH", Some(0.1)),
            paid("NO CHARGE", None),
            paid("DISPUTE", Some(44.05)),
            paid("CARD", Some(9.99)),
        ];

        let expected: f64 = trips.iter().filter_map(|t| t.total_amount).sum();
        let series = revenue_by_payment(&trips);
        assert!((series.total() - expected).abs() < 1e-9);
        assert_eq!(series.get("NO CHARGE"), Some(&0.0));
    }

    #[test]
    fn month_counts_cover_every_trip() {
        let trips = vec![
            picked_up("2024-03-01 08:00:00", "1"),
            picked_up("2024-01-15T10:00:00Z", "2"),
            picked_up("2024-03-20 17:45:00", "2"),
            picked_up("garbage", "1"),
        ];

        let series = trips_by_month(&trips);
        assert_eq!(series.labels(), ["Mar", "Jan", INVALID_DATE_LABEL]);
        assert_eq!(series.values(), [2, 1, 1]);
        assert_eq!(series.total(), trips.len() as u64);
    }

    #[test]
    fn vendor_counts() {
        let trips = vec![
            picked_up("2024-01-01", "2"),
            picked_up("2024-01-01", "1"),
            picked_up("2024-01-01", "2"),
        ];

        let aggregates = TripAggregates::compute(&trips);
        assert_eq!(aggregates.trips_by_vendor.labels(), ["2", "1"]);
        assert_eq!(aggregates.trips_by_vendor.values(), [2, 1]);
        assert_eq!(aggregates.trip_count, 3);
    }

    #[test]
    fn repeated_keys_keep_their_first_position() {
        let trips = vec![
            picked_up("2024-05-01", "A"),
            picked_up("2024-05-01", "B"),
            picked_up("2024-05-01", "A"),
            picked_up("2024-05-01", "C"),
            picked_up("2024-05-01", "B"),
            picked_up("2024-05-01", "A"),
        ];

        let series = trips_by_vendor(&trips);
        assert_eq!(series.labels(), ["A", "B", "C"]);
        assert_eq!(series.values(), [3, 2, 1]);
    }

    #[test]
    fn empty_collection_gives_empty_series() {
        let aggregates = TripAggregates::compute(&[]);
        assert!(aggregates.revenue_by_payment.is_empty());
        assert!(aggregates.trips_by_month.is_empty());
        assert_eq!(aggregates.trips_by_vendor.total(), 0);
    }
}
