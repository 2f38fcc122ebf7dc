use crate::config::TrendsConfig;
use crate::types::date_window::DateWindow;
use crate::types::measurement::Measurement;
use crate::weather_data::error::WeatherDataError;
use log::{debug, info, warn};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Identifies this tool to the Open-Meteo servers.
pub const CLIENT_USER_AGENT: &str = "Weather Trends";

/// Query string shared by the forecast and archive endpoints.
///
/// Only the unit parameter belonging to the requested measurement is serialized.
#[derive(Debug, Serialize)]
struct HourlyQuery {
    latitude: f64,
    longitude: f64,
    hourly: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature_unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    precipitation_unit: Option<&'static str>,
    start_date: String,
    end_date: String,
}

impl HourlyQuery {
    fn new(config: &TrendsConfig, window: &DateWindow) -> Self {
        let measurement = config.measurement();
        let unit = Some(measurement.unit());
        let (temperature_unit, precipitation_unit) = match measurement {
            Measurement::Temperature => (unit, None),
            Measurement::Precipitation => (None, unit),
        };
        Self {
            latitude: config.location().latitude(),
            longitude: config.location().longitude(),
            hourly: measurement.field_name(),
            temperature_unit,
            precipitation_unit,
            start_date: window.start_param(),
            end_date: window.end_param(),
        }
    }
}

/// Issues the per-year hourly requests.
///
/// The fetcher does not know which endpoint serves which year: the caller passes the
/// forecast URL for the current year and the archive URL for past years.
#[derive(Debug, Clone)]
pub struct HourlyFetcher {
    client: Client,
}

impl Default for HourlyFetcher {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl HourlyFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Requests the hourly series of `config`'s measurement for the window replayed in
    /// `year`, and returns the parsed JSON body.
    pub async fn fetch(
        &self,
        base_url: &str,
        config: &TrendsConfig,
        year: i32,
    ) -> Result<Value, WeatherDataError> {
        let window = config
            .window_for(year)
            .ok_or(WeatherDataError::InvalidDateWindow(year))?;
        let query = HourlyQuery::new(config, &window);

        info!(
            "Requesting {} for {} ({}) from {}",
            config.measurement(),
            year,
            window,
            base_url
        );
        debug!("Query parameters: {:?}", query);

        let response = self
            .client
            .get(base_url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .query(&query)
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(base_url.to_string(), e))?;

        let url = response.url().to_string();
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| WeatherDataError::JsonParse(url.clone(), e))?;

        // Open-Meteo reports bad parameters as {"error": true, "reason": "..."}.
        if value.get("error").and_then(Value::as_bool) == Some(true) {
            let reason = value
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("no reason given")
                .to_string();
            return Err(WeatherDataError::ApiRejected { url, reason });
        }

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(value)
    }
}
