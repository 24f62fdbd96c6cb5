//! Data module - CSV loading and series derivation

mod extractor;
mod loader;
mod transformer;

pub use extractor::{ExtractError, ItemSeriesExtractor};
pub use loader::{LoaderError, TableLoader};
pub use transformer::{RateSeriesTransformer, TransformError};

use polars::prelude::AnyValue;

/// Read one table cell as a chart value. Numeric cells come through as
/// `f64`; nulls and non-numeric cells become `None` - the extractors never
/// parse strings themselves, numeric typing is the loader's schema
/// inference.
pub(crate) fn numeric_cell(value: AnyValue) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        other => other.try_extract::<f64>().ok(),
    }
}
