//! Chart Series Types
//! The data handed to the shell's chart-drawing call. This crate prepares
//! series; it never draws them.

use serde::Serialize;

/// Display label for the first (month-over-month) rate metric.
pub const MOM_LABEL: &str = "month-over-month";
/// Display label for the second (year-over-year) rate metric.
pub const YOY_LABEL: &str = "year-over-year";

/// Fixed line color for the month-over-month series.
pub const MOM_COLOR: SeriesColor = SeriesColor::from_rgb(52, 152, 219); // Blue
/// Fixed line color for the year-over-year series.
pub const YOY_COLOR: SeriesColor = SeriesColor::from_rgb(231, 76, 60); // Red

/// An RGB color, kept renderer-agnostic so the shell can map it onto
/// whatever plotting backend it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One point of a time series: a period label and a numeric value, `None`
/// where the source cell was empty or not numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub period: String,
    pub value: Option<f64>,
}

/// Price-index series for one selected consumer-goods item.
///
/// Points keep the source table's column order left to right; nothing is
/// re-sorted or filtered by value. An unknown item yields an empty series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub item: String,
    pub points: Vec<SeriesPoint>,
}

impl CategorySeries {
    pub fn empty(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Period labels in display order.
    pub fn periods(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.period.as_str())
    }
}

/// One named, colored rate sequence aligned to a shared period axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSeries {
    pub label: &'static str,
    pub color: SeriesColor,
    pub values: Vec<Option<f64>>,
}

/// The month-over-month and year-over-year change-rate sequences over one
/// period axis, drawn as an overlaid line chart by the shell.
///
/// Invariant: both value vectors have the same length as `periods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSeriesPair {
    pub periods: Vec<String>,
    pub month_over_month: RateSeries,
    pub year_over_year: RateSeries,
}

impl RateSeriesPair {
    /// Number of periods on the shared x-axis.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
