mod config;
mod error;
mod trends;
mod types;
mod weather_data;
mod weather_trends;

pub use error::WeatherTrendsError;
pub use weather_trends::*;

pub use config::error::ConfigError;
pub use config::{TrendDuration, TrendsConfig};

pub use types::date_window::DateWindow;
pub use types::lat_lon::LatLon;
pub use types::measurement::Measurement;

pub use weather_data::error::WeatherDataError;
pub use weather_data::extractor::{extract_hourly_series, HourlySeries};
pub use weather_data::fetcher::{HourlyFetcher, CLIENT_USER_AGENT};

pub use trends::error::TrendsError;
pub use trends::table::{ColumnKey, TrendsTable, HOURS_COLUMN};
pub use trends::writer::{output_file_name, write_trends_csv};
