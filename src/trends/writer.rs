use crate::trends::error::TrendsError;
use crate::trends::table::TrendsTable;
use crate::types::measurement::Measurement;
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// `weather_trends_<measurement>_<MM-DD>.csv`
///
/// # Examples
///
/// ```
/// use weather_trends::{output_file_name, Measurement};
///
/// assert_eq!(
///     output_file_name(Measurement::Precipitation, "06-15"),
///     "weather_trends_precipitation_06-15.csv"
/// );
/// ```
pub fn output_file_name(measurement: Measurement, month_day: &str) -> String {
    format!("weather_trends_{}_{}.csv", measurement, month_day)
}

/// Writes the trends table as CSV into `output_dir`, replacing any file of the same name.
///
/// The table is validated before the file is created, so a data shortfall never
/// leaves a truncated file behind.
pub fn write_trends_csv(
    table: &TrendsTable,
    measurement: Measurement,
    month_day: &str,
    output_dir: &Path,
) -> Result<PathBuf, TrendsError> {
    let mut df = table.to_data_frame()?;
    let path = output_dir.join(output_file_name(measurement, month_day));

    let mut file = File::create(&path).map_err(|e| TrendsError::OutputIo(path.clone(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| TrendsError::Serialize(path.clone(), e))?;

    info!(
        "Wrote {} rows x {} columns to {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(path)
}
