//! CSV Table Loader
//! Reads a delimited table fully into memory using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("table resource not found: {0}")]
    ResourceUnavailable(String),
    #[error("failed to parse table: {0}")]
    Parse(#[from] PolarsError),
}

/// Loads comma-delimited tables with a header row. Text is read as UTF-8;
/// numeric columns come from Polars' schema inference, nothing is coerced
/// here. No schema-shape validation happens at load time: a malformed
/// table only surfaces when a derived view asks for a column it needs.
///
/// Each call re-reads the file. Tables are request-scoped and never cached
/// across shell interactions.
pub struct TableLoader;

impl TableLoader {
    /// Load a CSV file into a [`DataFrame`].
    pub fn load(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::ResourceUnavailable(
                path.display().to_string(),
            ));
        }

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded table"
        );
        Ok(df)
    }

    /// Get list of column names from a loaded table.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Distinct values of a column, first-appearance order, for the
    /// shell's item dropdown. A missing column yields an empty list; the
    /// shape problem surfaces later when the view itself is derived.
    pub fn unique_values(df: &DataFrame, column: &str) -> Vec<String> {
        df.column(column)
            .ok()
            .and_then(|col| col.as_materialized_series().unique_stable().ok())
            .map(|unique| {
                (0..unique.len())
                    .filter_map(|i| {
                        let val = unique.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_goods_csv(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("goods.csv");
        fs::write(
            &path,
            "region,item,2022.01,2022.02\nSeoul,rice,100,105\nSeoul,flour,90,92\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn loads_table_with_header_columns() {
        let tmp = tempdir().unwrap();
        let path = write_goods_csv(tmp.path());

        let df = TableLoader::load(&path).unwrap();
        assert_eq!(
            TableLoader::column_names(&df),
            vec!["region", "item", "2022.01", "2022.02"]
        );
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn missing_file_is_resource_unavailable() {
        let tmp = tempdir().unwrap();
        let err = TableLoader::load(tmp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::ResourceUnavailable(_)));
    }

    #[test]
    fn reloading_an_unchanged_file_yields_the_same_table() {
        let tmp = tempdir().unwrap();
        let path = write_goods_csv(tmp.path());

        let first = TableLoader::load(&path).unwrap();
        let second = TableLoader::load(&path).unwrap();
        assert!(first.equals_missing(&second));
        assert_eq!(
            TableLoader::column_names(&first),
            TableLoader::column_names(&second)
        );
    }

    #[test]
    fn unique_values_keeps_first_appearance_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("goods.csv");
        fs::write(
            &path,
            "item,2022.01\nrice,100\nflour,90\nrice,101\negg,80\n",
        )
        .unwrap();

        let df = TableLoader::load(&path).unwrap();
        assert_eq!(
            TableLoader::unique_values(&df, "item"),
            vec!["rice", "flour", "egg"]
        );
    }

    #[test]
    fn unique_values_of_a_missing_column_is_empty() {
        let tmp = tempdir().unwrap();
        let path = write_goods_csv(tmp.path());
        let df = TableLoader::load(&path).unwrap();
        assert!(TableLoader::unique_values(&df, "category").is_empty());
    }
}
