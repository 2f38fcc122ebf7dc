use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid duration {0}, expected a number of days between {min} and {max}", min = crate::TrendDuration::MIN_DAYS, max = crate::TrendDuration::MAX_DAYS)]
    InvalidDuration(i64),

    #[error("No past years were given to compare against")]
    NoYears,
}
