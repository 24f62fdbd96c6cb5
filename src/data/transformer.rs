//! Rate Series Transformer
//! Transposes the two-row price-index table into the pair of rate series
//! drawn as an overlaid line chart.

use polars::prelude::*;
use thiserror::Error;

use super::numeric_cell;
use crate::charts::{RateSeries, RateSeriesPair, MOM_COLOR, MOM_LABEL, YOY_COLOR, YOY_LABEL};

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("rate table must have exactly two metric rows, got {rows}")]
    UnsupportedShape { rows: usize },
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Structural transpose of the price-index table.
///
/// The input already has the right orientation - rows are metrics, columns
/// are periods - so the only work is flipping it onto the period axis.
/// Labeling is positional, never name-based: the first row is always the
/// month-over-month series, the second always year-over-year. Any other
/// row count is rejected outright rather than mislabeled.
pub struct RateSeriesTransformer;

impl RateSeriesTransformer {
    pub fn transform(df: &DataFrame) -> Result<RateSeriesPair, TransformError> {
        if df.height() != 2 {
            return Err(TransformError::UnsupportedShape { rows: df.height() });
        }

        let mut periods = Vec::with_capacity(df.width());
        let mut mom_values = Vec::with_capacity(df.width());
        let mut yoy_values = Vec::with_capacity(df.width());

        for col in df.get_columns() {
            let series = col.as_materialized_series();
            periods.push(col.name().to_string());
            mom_values.push(numeric_cell(series.get(0)?));
            yoy_values.push(numeric_cell(series.get(1)?));
        }

        Ok(RateSeriesPair {
            periods,
            month_over_month: RateSeries {
                label: MOM_LABEL,
                color: MOM_COLOR,
                values: mom_values,
            },
            year_over_year: RateSeries {
                label: YOY_LABEL,
                color: YOY_COLOR,
                values: yoy_values,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transposes_rows_onto_the_period_axis() {
        let df = df!(
            "2022.01" => &[0.1f64, 1.1],
            "2022.02" => &[0.2f64, 1.3],
        )
        .unwrap();

        let pair = RateSeriesTransformer::transform(&df).unwrap();
        assert_eq!(pair.periods, vec!["2022.01", "2022.02"]);
        assert_eq!(pair.month_over_month.values, vec![Some(0.1), Some(0.2)]);
        assert_eq!(pair.year_over_year.values, vec![Some(1.1), Some(1.3)]);
    }

    #[test]
    fn labels_and_colors_are_positional_and_fixed() {
        let df = df!(
            "2022.01" => &[0.1f64, 1.1],
        )
        .unwrap();

        let pair = RateSeriesTransformer::transform(&df).unwrap();
        assert_eq!(pair.month_over_month.label, MOM_LABEL);
        assert_eq!(pair.month_over_month.color, MOM_COLOR);
        assert_eq!(pair.year_over_year.label, YOY_LABEL);
        assert_eq!(pair.year_over_year.color, YOY_COLOR);
    }

    #[test]
    fn both_series_stay_aligned_to_the_periods() {
        let df = df!(
            "2021.12" => &[Some(0.2f64), Some(3.7)],
            "2022.01" => &[None::<f64>, Some(3.6)],
            "2022.02" => &[Some(0.6f64), None],
        )
        .unwrap();

        let pair = RateSeriesTransformer::transform(&df).unwrap();
        assert_eq!(pair.len(), 3);
        assert_eq!(pair.month_over_month.values.len(), pair.periods.len());
        assert_eq!(pair.year_over_year.values.len(), pair.periods.len());
        assert_eq!(pair.month_over_month.values[1], None);
        assert_eq!(pair.year_over_year.values[2], None);
    }

    #[test]
    fn one_metric_row_is_unsupported() {
        let df = df!("2022.01" => &[0.1f64]).unwrap();
        let err = RateSeriesTransformer::transform(&df).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedShape { rows: 1 }));
    }

    #[test]
    fn extra_metric_rows_are_unsupported() {
        let df = df!(
            "2022.01" => &[0.1f64, 1.1, 2.5],
            "2022.02" => &[0.2f64, 1.3, 2.6],
        )
        .unwrap();

        let err = RateSeriesTransformer::transform(&df).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedShape { rows: 3 }));
    }
}
