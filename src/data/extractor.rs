//! Item Series Extractor
//! Isolates one consumer-goods item from the category table and flattens
//! it into the (period, value) sequence the line chart draws.

use polars::prelude::*;
use thiserror::Error;
use tracing::warn;

use super::numeric_cell;
use crate::charts::{CategorySeries, SeriesPoint};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("column {0:?} missing from table")]
    MissingColumn(String),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Derives a [`CategorySeries`] from a category table.
///
/// The table is expected to carry one row per item: a key column holding
/// the item name, descriptive columns (region labels and the like) that
/// the time-series view never needs, and one column per period.
pub struct ItemSeriesExtractor;

impl ItemSeriesExtractor {
    /// Extract the series for `selected_key`.
    ///
    /// Descriptive columns are dropped unconditionally, then rows are
    /// filtered on exact, case-sensitive equality of the key column and
    /// the key column itself is removed. The remaining columns become the
    /// points, left to right, with no sorting and no value filtering.
    ///
    /// A key that matches no row yields an empty series, not an error.
    /// The table is assumed to hold one row per item; should several rows
    /// match, the first in original row order wins.
    pub fn extract(
        df: &DataFrame,
        key_column: &str,
        descriptive_columns: &[String],
        selected_key: &str,
    ) -> Result<CategorySeries, ExtractError> {
        let mut table = df.clone();
        for name in descriptive_columns {
            table = table
                .drop(name)
                .map_err(|_| ExtractError::MissingColumn(name.clone()))?;
        }

        if table.column(key_column).is_err() {
            return Err(ExtractError::MissingColumn(key_column.to_string()));
        }

        let matched = table
            .lazy()
            .filter(col(key_column).eq(lit(selected_key)))
            .collect()?;

        if matched.height() == 0 {
            return Ok(CategorySeries::empty(selected_key));
        }
        if matched.height() > 1 {
            warn!(
                key = selected_key,
                matches = matched.height(),
                "multiple rows matched an item key; using the first"
            );
        }

        let matched = matched.drop(key_column)?;

        let points = matched
            .get_columns()
            .iter()
            .map(|col| {
                let value = col
                    .as_materialized_series()
                    .get(0)
                    .ok()
                    .and_then(numeric_cell);
                SeriesPoint {
                    period: col.name().to_string(),
                    value,
                }
            })
            .collect();

        Ok(CategorySeries {
            item: selected_key.to_string(),
            points,
        })
    }
}
