use crate::types::date_window::DateWindow;
use crate::types::measurement::Measurement;
use crate::weather_data::error::WeatherDataError;
use chrono::{Duration, NaiveDateTime};
use log::{debug, warn};
use serde_json::Value;

const HOURLY_KEY: &str = "hourly";
const TIME_KEY: &str = "time";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The hourly values of one measurement for one target year, in API order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HourlySeries {
    pub year: i32,
    /// Time stamps as reported by the API (`YYYY-MM-DDTHH:MM`).
    pub times: Vec<String>,
    /// One value per time stamp; `None` where the API reported `null`.
    pub values: Vec<Option<f64>>,
}

impl HourlySeries {
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cross-checks the reported time stamps against the hour index.
    ///
    /// The time list must be as long as the value list, and time stamp `i` must be
    /// `window.start 00:00 + i hours` for every `i < hours` that is present. A series
    /// that is merely short passes; the trends table reports the shortfall.
    pub fn verify_alignment(&self, window: &DateWindow, hours: usize) -> Result<(), WeatherDataError> {
        if self.times.len() != self.values.len() {
            return Err(WeatherDataError::TimeValueLengthMismatch {
                year: self.year,
                times: self.times.len(),
                values: self.values.len(),
            });
        }

        let first_hour = window.first_hour();
        for (index, found) in self.times.iter().take(hours).enumerate() {
            let expected = first_hour + Duration::hours(index as i64);
            let parsed = NaiveDateTime::parse_from_str(found, TIME_FORMAT).ok();
            if parsed != Some(expected) {
                return Err(WeatherDataError::MisalignedHour {
                    year: self.year,
                    index,
                    expected,
                    found: found.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Pulls `hourly.<field>` for `measurement` out of an Open-Meteo response.
///
/// A missing or empty `hourly` object, `time` list or measurement list yields an empty
/// series instead of an error.
pub fn extract_hourly_series(
    response: &Value,
    measurement: Measurement,
    year: i32,
) -> Result<HourlySeries, WeatherDataError> {
    let field = measurement.field_name();

    let Some(hourly) = response.get(HOURLY_KEY).filter(|v| is_truthy(v)) else {
        warn!("Response for {year} has no '{HOURLY_KEY}' data");
        return Ok(HourlySeries::empty(year));
    };
    let (Some(times), Some(values)) = (
        hourly.get(TIME_KEY).filter(|v| is_truthy(v)),
        hourly.get(field).filter(|v| is_truthy(v)),
    ) else {
        warn!("Response for {year} is missing '{TIME_KEY}' or '{field}'");
        return Ok(HourlySeries::empty(year));
    };

    let times = as_list(times, TIME_KEY, year)?
        .iter()
        .enumerate()
        .map(|(index, v)| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| unexpected(year, TIME_KEY, index, v))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values = as_list(values, field, year)?
        .iter()
        .enumerate()
        .map(|(index, v)| match v {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| unexpected(year, field, index, v)),
            other => Err(unexpected(year, field, index, other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Extracted {} '{}' values for {}", values.len(), field, year);
    Ok(HourlySeries {
        year,
        times,
        values,
    })
}

fn as_list<'a>(value: &'a Value, field: &str, year: i32) -> Result<&'a Vec<Value>, WeatherDataError> {
    value
        .as_array()
        .ok_or_else(|| unexpected(year, field, 0, value))
}

fn unexpected(year: i32, field: &str, index: usize, value: &Value) -> WeatherDataError {
    WeatherDataError::UnexpectedValue {
        year,
        field: field.to_string(),
        index,
        value: value.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
