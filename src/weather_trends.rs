//! The main entry point of the library: fetches the current forecast and the archived
//! observations for the same calendar window in past years, and aligns them into a
//! trends table.

use crate::config::TrendsConfig;
use crate::error::WeatherTrendsError;
use crate::trends::table::TrendsTable;
use crate::trends::writer::write_trends_csv;
use crate::weather_data::error::WeatherDataError;
use crate::weather_data::extractor::{extract_hourly_series, HourlySeries};
use crate::weather_data::fetcher::HourlyFetcher;
use bon::bon;
use log::info;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Open-Meteo endpoint serving the forecast for the current year.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Open-Meteo endpoint serving observations for past years.
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Client that runs the fetch, align and write pipeline.
///
/// Requests are issued one at a time: the forecast first, then each past year in the
/// order configured.
///
/// # Examples
///
/// ```no_run
/// # use weather_trends::{LatLon, TrendsConfig, WeatherTrends, WeatherTrendsError};
/// # use chrono::Local;
/// # use std::path::Path;
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherTrendsError> {
/// let config = TrendsConfig::builder()
///     .location(LatLon(40.42, -79.79))
///     .duration_days(1)
///     .today(Local::now().date_naive())
///     .past_years(vec![2020])
///     .build()?;
///
/// let path = WeatherTrends::default().run(&config, Path::new(".")).await?;
/// println!("Wrote {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WeatherTrends {
    fetcher: HourlyFetcher,
    forecast_url: String,
    archive_url: String,
}

impl Default for WeatherTrends {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl WeatherTrends {
    /// Creates a client.
    ///
    /// * `forecast_url` - defaults to [`FORECAST_URL`].
    /// * `archive_url` - defaults to [`ARCHIVE_URL`].
    /// * `http_client` - defaults to a plain `reqwest::Client`.
    #[builder]
    pub fn new(
        #[builder(into)] forecast_url: Option<String>,
        #[builder(into)] archive_url: Option<String>,
        http_client: Option<Client>,
    ) -> Self {
        Self {
            fetcher: HourlyFetcher::new(http_client.unwrap_or_default()),
            forecast_url: forecast_url.unwrap_or_else(|| FORECAST_URL.to_string()),
            archive_url: archive_url.unwrap_or_else(|| ARCHIVE_URL.to_string()),
        }
    }

    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    pub fn archive_url(&self) -> &str {
        &self.archive_url
    }

    /// Fetches, extracts and cross-checks the series for one year.
    ///
    /// The current year is read from the forecast endpoint, every other year from the
    /// archive endpoint.
    pub async fn fetch_series(
        &self,
        config: &TrendsConfig,
        year: i32,
    ) -> Result<HourlySeries, WeatherDataError> {
        let base_url = if year == config.current_year() {
            &self.forecast_url
        } else {
            &self.archive_url
        };
        let window = config
            .window_for(year)
            .ok_or(WeatherDataError::InvalidDateWindow(year))?;

        let response = self.fetcher.fetch(base_url, config, year).await?;
        let series = extract_hourly_series(&response, config.measurement(), year)?;
        series.verify_alignment(&window, config.duration().hours())?;
        Ok(series)
    }

    /// Builds the trends table: the current year column followed by each past year.
    pub async fn collect(&self, config: &TrendsConfig) -> Result<TrendsTable, WeatherTrendsError> {
        let mut table = TrendsTable::new(config.duration());

        let years = std::iter::once(config.current_year()).chain(config.past_years().iter().copied());
        for year in years {
            let series = self.fetch_series(config, year).await?;
            info!("Fetched {} hourly values for {}", series.len(), year);
            table.push(series)?;
        }
        Ok(table)
    }

    /// Collects the trends table and writes it as CSV into `output_dir`.
    ///
    /// Returns the path of the written file.
    pub async fn run(
        &self,
        config: &TrendsConfig,
        output_dir: &Path,
    ) -> Result<PathBuf, WeatherTrendsError> {
        let table = self.collect(config).await?;
        let path = write_trends_csv(
            &table,
            config.measurement(),
            &config.month_day(),
            output_dir,
        )?;
        Ok(path)
    }
}
