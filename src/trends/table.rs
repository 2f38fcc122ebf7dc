//! The trends table: an hour index plus one hourly series per target year.

use crate::config::TrendDuration;
use crate::trends::error::TrendsError;
use crate::weather_data::extractor::HourlySeries;
use polars::prelude::*;
use std::fmt;

pub const HOURS_COLUMN: &str = "hours";

/// Key of a trends table column, also used as its CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Hours,
    Year(i32),
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Hours => write!(f, "{}", HOURS_COLUMN),
            ColumnKey::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Year columns aligned against a fixed hour index.
///
/// Columns keep insertion order: the current year is pushed first, past years follow in
/// the order they were requested. Every column must provide at least
/// [`TrendsTable::hours`] values before rows can be read; extra values are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsTable {
    hours: usize,
    columns: Vec<HourlySeries>,
}

impl TrendsTable {
    pub fn new(duration: TrendDuration) -> Self {
        Self {
            hours: duration.hours(),
            columns: Vec::new(),
        }
    }

    /// Number of rows, `duration × 24`.
    pub fn hours(&self) -> usize {
        self.hours
    }

    /// The hour index column, `0..hours`.
    pub fn hour_index(&self) -> Vec<i64> {
        (0..self.hours as i64).collect()
    }

    /// Appends a year column.
    pub fn push(&mut self, series: HourlySeries) -> Result<(), TrendsError> {
        if self.columns.iter().any(|c| c.year == series.year) {
            return Err(TrendsError::DuplicateColumn(series.year));
        }
        self.columns.push(series);
        Ok(())
    }

    /// Column keys in output order: `hours` first, then the years.
    pub fn keys(&self) -> Vec<ColumnKey> {
        std::iter::once(ColumnKey::Hours)
            .chain(self.columns.iter().map(|c| ColumnKey::Year(c.year)))
            .collect()
    }

    pub fn series(&self, year: i32) -> Option<&HourlySeries> {
        self.columns.iter().find(|c| c.year == year)
    }

    /// Fails with [`TrendsError::DataShortfall`] for the first column shorter than the
    /// hour index.
    pub fn check_complete(&self) -> Result<(), TrendsError> {
        match self.columns.iter().find(|c| c.len() < self.hours) {
            Some(short) => Err(TrendsError::DataShortfall {
                year: short.year,
                expected: self.hours,
                found: short.len(),
            }),
            None => Ok(()),
        }
    }

    /// Values of row `index` for every year column, in column order.
    pub fn row(&self, index: usize) -> Result<Vec<Option<f64>>, TrendsError> {
        self.columns
            .iter()
            .map(|c| {
                c.values
                    .get(index)
                    .copied()
                    .ok_or(TrendsError::DataShortfall {
                        year: c.year,
                        expected: self.hours,
                        found: c.len(),
                    })
            })
            .collect()
    }

    /// Builds the frame that gets serialized: the hour index plus each year column cut
    /// to the index length.
    pub fn to_data_frame(&self) -> Result<DataFrame, TrendsError> {
        self.check_complete()?;

        let mut columns = Vec::with_capacity(self.columns.len() + 1);
        columns.push(Column::new(HOURS_COLUMN.into(), self.hour_index()));
        for series in &self.columns {
            let name = ColumnKey::Year(series.year).to_string();
            columns.push(Column::new(name.into(), &series.values[..self.hours]));
        }
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(year: i32, len: usize) -> HourlySeries {
        HourlySeries {
            year,
            times: vec![String::new(); len],
            values: (0..len).map(|v| Some(v as f64)).collect(),
        }
    }

    #[test]
    fn test_hour_index_for_all_durations() {
        for days in 1..=5 {
            let table = TrendsTable::new(TrendDuration::new(days).unwrap());
            let index = table.hour_index();
            assert_eq!(index.len(), days as usize * 24);
            assert_eq!(index[0], 0);
            assert!(index.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn test_keys_follow_insertion_order() {
        let mut table = TrendsTable::new(TrendDuration::new(1).unwrap());
        table.push(series(2025, 24)).unwrap();
        table.push(series(2012, 24)).unwrap();
        table.push(series(2010, 24)).unwrap();

        let keys: Vec<String> = table.keys().iter().map(ToString::to_string).collect();
        assert_eq!(keys, ["hours", "2025", "2012", "2010"]);
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let mut table = TrendsTable::new(TrendDuration::new(1).unwrap());
        table.push(series(2020, 24)).unwrap();
        assert!(matches!(
            table.push(series(2020, 24)),
            Err(TrendsError::DuplicateColumn(2020))
        ));
    }

    #[test]
    fn test_short_column_is_reported() {
        let mut table = TrendsTable::new(TrendDuration::new(2).unwrap());
        table.push(series(2025, 72)).unwrap();
        table.push(series(2020, 30)).unwrap();

        assert!(matches!(
            table.check_complete(),
            Err(TrendsError::DataShortfall {
                year: 2020,
                expected: 48,
                found: 30
            })
        ));
        assert!(table.row(29).is_ok());
        assert!(matches!(
            table.row(30),
            Err(TrendsError::DataShortfall { year: 2020, .. })
        ));
        assert!(matches!(
            table.to_data_frame(),
            Err(TrendsError::DataShortfall { .. })
        ));
    }

    #[test]
    fn test_empty_column_is_reported() {
        let mut table = TrendsTable::new(TrendDuration::new(1).unwrap());
        table.push(HourlySeries::empty(2019)).unwrap();
        assert!(matches!(
            table.check_complete(),
            Err(TrendsError::DataShortfall { found: 0, .. })
        ));
    }

    #[test]
    fn test_frame_is_cut_to_hour_index() {
        let mut table = TrendsTable::new(TrendDuration::new(1).unwrap());
        table.push(series(2025, 48)).unwrap();
        table.push(series(2020, 24)).unwrap();

        let df = table.to_data_frame().unwrap();
        assert_eq!(df.shape(), (24, 3));
        assert_eq!(df.get_column_names(), ["hours", "2025", "2020"]);

        let last = df.column("2025").unwrap().f64().unwrap().get(23);
        assert_eq!(last, Some(23.0));
    }
}
