//! Validated configuration for a single trends run.

pub mod error;

use crate::config::error::ConfigError;
use crate::types::date_window::DateWindow;
use crate::types::lat_lon::LatLon;
use crate::types::measurement::Measurement;
use bon::bon;
use chrono::{Datelike, NaiveDate};
use log::warn;

/// Number of days in the trends window, guaranteed to be within
/// [`TrendDuration::MIN_DAYS`]..=[`TrendDuration::MAX_DAYS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrendDuration(u32);

impl TrendDuration {
    pub const MIN_DAYS: u32 = 1;
    pub const MAX_DAYS: u32 = 5;

    /// Validates a raw day count.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_trends::TrendDuration;
    ///
    /// assert_eq!(TrendDuration::new(2).unwrap().hours(), 48);
    /// assert!(TrendDuration::new(0).is_err());
    /// assert!(TrendDuration::new(6).is_err());
    /// ```
    pub fn new(days: i64) -> Result<Self, ConfigError> {
        u32::try_from(days)
            .ok()
            .filter(|d| (Self::MIN_DAYS..=Self::MAX_DAYS).contains(d))
            .map(Self)
            .ok_or(ConfigError::InvalidDuration(days))
    }

    pub fn days(self) -> u32 {
        self.0
    }

    /// Length of the hour index, `days × 24`.
    pub fn hours(self) -> usize {
        self.0 as usize * 24
    }
}

/// Everything needed to fetch and align one set of weather trends.
///
/// The current year (taken from `today`) is always the first target year and is
/// served by the forecast endpoint; `past_years` are served by the archive endpoint
/// in the order they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendsConfig {
    location: LatLon,
    duration: TrendDuration,
    measurement: Measurement,
    today: NaiveDate,
    past_years: Vec<i32>,
}

#[bon]
impl TrendsConfig {
    /// Builds and validates a configuration.
    ///
    /// * `past_years` defaults to the previous calendar year. Duplicates, and the current
    ///   year itself, are dropped with a warning, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDuration`] if `duration_days` is outside 1–5, and
    /// [`ConfigError::NoYears`] if an explicitly empty list of past years is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_trends::{LatLon, Measurement, TrendsConfig};
    ///
    /// let config = TrendsConfig::builder()
    ///     .location(LatLon(40.42, -79.79))
    ///     .duration_days(1)
    ///     .today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    ///     .past_years(vec![2020])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.current_year(), 2025);
    /// assert_eq!(config.past_years(), &[2020]);
    /// assert_eq!(config.measurement(), Measurement::Temperature);
    /// ```
    #[builder]
    pub fn new(
        location: LatLon,
        duration_days: i64,
        #[builder(default)] measurement: Measurement,
        today: NaiveDate,
        past_years: Option<Vec<i32>>,
    ) -> Result<Self, ConfigError> {
        let duration = TrendDuration::new(duration_days)?;
        let current_year = today.year();

        let requested = match past_years {
            Some(years) if years.is_empty() => return Err(ConfigError::NoYears),
            Some(years) => years,
            None => vec![current_year - 1],
        };

        let mut past_years: Vec<i32> = Vec::with_capacity(requested.len());
        for year in requested {
            if year == current_year {
                warn!("Skipping {year}: the current year is always read from the forecast");
            } else if past_years.contains(&year) {
                warn!("Skipping duplicate year {year}");
            } else {
                past_years.push(year);
            }
        }

        Ok(Self {
            location,
            duration,
            measurement,
            today,
            past_years,
        })
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn duration(&self) -> TrendDuration {
        self.duration
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }

    pub fn past_years(&self) -> &[i32] {
        &self.past_years
    }

    /// The date window replayed in `year`, or `None` if the year cannot be represented.
    pub fn window_for(&self, year: i32) -> Option<DateWindow> {
        DateWindow::for_year(self.today, self.duration.days(), year)
    }

    /// Current month and day, `MM-DD`, as used in the output file name.
    pub fn month_day(&self) -> String {
        self.today.format("%m-%d").to_string()
    }
}
