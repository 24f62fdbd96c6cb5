//! Dashboard Pipelines
//! The request-scoped API the presentation shell calls. Every method
//! re-reads its resource from disk: views are derived synchronously per
//! interaction and nothing is cached across requests.

use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::instrument;

use crate::charts::{CategorySeries, RateSeriesPair};
use crate::commentary::{Commentary, CommentaryError, CommentaryReader};
use crate::config::DashboardConfig;
use crate::data::{
    ExtractError, ItemSeriesExtractor, LoaderError, RateSeriesTransformer, TableLoader,
    TransformError,
};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Commentary(#[from] CommentaryError),
}

/// One dashboard over one set of configured resources.
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Years offered by the commentary dropdown.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.config.years()
    }

    /// Item names for the shell's category dropdown: the distinct values
    /// of the key column, in first-appearance order.
    pub fn item_names(&self) -> Result<Vec<String>, DashboardError> {
        let df = TableLoader::load(&self.config.goods_table)?;
        Ok(TableLoader::unique_values(&df, &self.config.key_column))
    }

    /// Price series for one selected item, ready for the line chart.
    #[instrument(skip(self))]
    pub fn item_view(&self, item: &str) -> Result<CategorySeries, DashboardError> {
        let df = TableLoader::load(&self.config.goods_table)?;
        let series = ItemSeriesExtractor::extract(
            &df,
            &self.config.key_column,
            &self.config.descriptive_columns,
            item,
        )?;
        Ok(series)
    }

    /// The month-over-month / year-over-year pair for the index chart.
    #[instrument(skip(self))]
    pub fn rate_view(&self) -> Result<RateSeriesPair, DashboardError> {
        let df = TableLoader::load(&self.config.index_table)?;
        Ok(RateSeriesTransformer::transform(&df)?)
    }

    /// Commentary text for a selected point in time. Never fails on a
    /// missing file; the shell renders [`Commentary::NotFound`] however it
    /// likes.
    pub fn commentary(&self, year: i32, month: u32) -> Result<Commentary, DashboardError> {
        let reader = CommentaryReader::new(&self.config.commentary_dir);
        Ok(reader.read(year, month)?)
    }
}
