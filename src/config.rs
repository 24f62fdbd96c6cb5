//! Dashboard Configuration
//! Resource locations and table layout, loadable from a TOML file.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where the dashboard's resources live and how the category table is laid
/// out. Defaults match the statistics-office export files the dashboard
/// ships with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Category table: one row per consumer-goods item.
    pub goods_table: PathBuf,
    /// Price-index table: two metric rows over period columns.
    pub index_table: PathBuf,
    /// Directory of per-(year, month) commentary text files.
    pub commentary_dir: PathBuf,
    /// Column of the category table holding the item name.
    pub key_column: String,
    /// Region-type columns the time-series view drops unconditionally.
    pub descriptive_columns: Vec<String>,
    /// First year the commentary dropdown offers.
    pub first_year: i32,
    /// Last year the commentary dropdown offers.
    pub last_year: i32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            goods_table: PathBuf::from("주요_소비재_가격_변동.csv"),
            index_table: PathBuf::from("소비자_물가_지수_추이.csv"),
            commentary_dir: PathBuf::from("물가동향"),
            key_column: "품목별".to_string(),
            descriptive_columns: vec!["시도별".to_string()],
            first_year: 2022,
            last_year: 2024,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file. Absent keys fall back to the
    /// defaults.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Years the shell's commentary dropdown is populated from.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}
