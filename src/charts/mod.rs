//! Charts module - renderer-facing series types

mod series;

pub use series::{
    CategorySeries, RateSeries, RateSeriesPair, SeriesColor, SeriesPoint, MOM_COLOR, MOM_LABEL,
    YOY_COLOR, YOY_LABEL,
};
