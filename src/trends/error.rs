use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("Column {year} has {found} hourly values, {expected} are needed")]
    DataShortfall {
        year: i32,
        expected: usize,
        found: usize,
    },

    #[error("Column {0} is already present in the trends table")]
    DuplicateColumn(i32),

    #[error("Failed building the trends frame")]
    DataFrame(#[from] PolarsError),

    #[error("Failed to create output file '{0}'")]
    OutputIo(PathBuf, #[source] std::io::Error),

    #[error("Failed to write CSV to '{0}'")]
    Serialize(PathBuf, #[source] PolarsError),
}
