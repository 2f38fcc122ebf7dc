use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherDataError {
    #[error("Cannot build a date window in year {0}")]
    InvalidDateWindow(i32),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON response from {0}")]
    JsonParse(String, #[source] serde_json::Error),

    #[error("API rejected request to {url}: {reason}")]
    ApiRejected { url: String, reason: String },

    #[error("Unexpected value {value} at position {index} of '{field}' for {year}")]
    UnexpectedValue {
        year: i32,
        field: String,
        index: usize,
        value: String,
    },

    #[error("Response for {year} has {times} time stamps but {values} values")]
    TimeValueLengthMismatch {
        year: i32,
        times: usize,
        values: usize,
    },

    #[error("Hour {index} of {year} is '{found}', expected {expected}")]
    MisalignedHour {
        year: i32,
        index: usize,
        expected: NaiveDateTime,
        found: String,
    },
}
