//! Query - Sort Keys, Sort Order and the Sorted Listing Request

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Columns the sorted endpoint accepts for `sortBy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PickupDatetime,
    #[default]
    FareAmount,
    TripDistance,
    PaymentType,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::PickupDatetime,
        SortKey::FareAmount,
        SortKey::TripDistance,
        SortKey::PaymentType,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PickupDatetime => "pickup_datetime",
            SortKey::FareAmount => "fare_amount",
            SortKey::TripDistance => "trip_distance",
            SortKey::PaymentType => "payment_type",
        }
    }

    /// Human label: the wire name with underscores as spaces
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("Unknown sort key: {s}"),
            })
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one `GET /sorted` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub limit: u32,
    pub offset: u64,
}

impl ListingQuery {
    /// Query-string pairs in the order the API documents them
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}
