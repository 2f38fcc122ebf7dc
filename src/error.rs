use crate::config::error::ConfigError;
use crate::trends::error::TrendsError;
use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherTrendsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error(transparent)]
    Trends(#[from] TrendsError),
}
