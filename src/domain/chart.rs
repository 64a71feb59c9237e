//! Chart - Renderer-Agnostic Chart Descriptors

use serde::Serialize;

use super::aggregation::{Series, TripAggregates};

const REVENUE_PALETTE: &[&str] = &["#A8E6CF", "#FFD3B6", "#FFAAA5", "#D4A5A5"];
const MONTH_PALETTE: &[&str] = &[
    "#FFB6C1", "#FFD700", "#87CEFA", "#90EE90", "#FF69B4", "#DDA0DD",
];
const VENDOR_PALETTE: &[&str] = &["#FFDDC1", "#FFABAB", "#FFC3A0"];
const BORDER_COLOR: &str = "#ddd";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Everything a chart renderer needs for one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: &'static str,
    pub dataset_label: Option<&'static str>,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One colour per bar/slice; the palette repeats when there are more groups
    pub background: Vec<&'static str>,
    pub border_color: &'static str,
}

impl ChartData {
    fn from_series<V: Copy + Into<f64>>(
        title: &'static str,
        dataset_label: Option<&'static str>,
        kind: ChartKind,
        palette: &[&'static str],
        series: &Series<V>,
    ) -> Self {
        Self {
            title,
            dataset_label,
            kind,
            labels: series.labels().to_vec(),
            values: series.values().iter().map(|v| (*v).into()).collect(),
            background: (0..series.len())
                .map(|i| palette[i % palette.len()])
                .collect(),
            border_color: BORDER_COLOR,
        }
    }

    pub fn revenue(series: &Series<f64>) -> Self {
        Self::from_series(
            "Taxi Revenue by Payment Type",
            Some("Total Revenue by Payment Type"),
            ChartKind::Bar,
            REVENUE_PALETTE,
            series,
        )
    }

    pub fn monthly_trips(series: &Series<u64>) -> Self {
        let counts = to_f64_series(series);
        Self::from_series(
            "Taxi Trips by Month",
            Some("Number of Trips"),
            ChartKind::Bar,
            MONTH_PALETTE,
            &counts,
        )
    }

    pub fn vendors(series: &Series<u64>) -> Self {
        let counts = to_f64_series(series);
        Self::from_series(
            "Vendor Distribution",
            None,
            ChartKind::Pie,
            VENDOR_PALETTE,
            &counts,
        )
    }

    /// Charts in panel order: revenue, monthly trips, vendors
    pub fn panel(aggregates: &TripAggregates) -> [ChartData; 3] {
        [
            Self::revenue(&aggregates.revenue_by_payment),
            Self::monthly_trips(&aggregates.trips_by_month),
            Self::vendors(&aggregates.trips_by_vendor),
        ]
    }
}

// u64 has no lossless Into<f64>; counts are small enough for the cast.
fn to_f64_series(series: &Series<u64>) -> Series<f64> {
    series
        .iter()
        .map(|(label, count)| (label.to_string(), *count as f64))
        .collect()
}
