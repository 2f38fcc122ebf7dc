//! A minimal HTTP server standing in for the Open-Meteo forecast and archive endpoints.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub raw_query: String,
    pub user_agent: Option<String>,
}

pub type Responder = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

pub struct MockOpenMeteo {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockOpenMeteo {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responder: Arc<Responder> = Arc::new(responder);

        let recorded = requests.clone();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let mut buffer = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = parse_request(&String::from_utf8_lossy(&buffer));
                let (status, body) = responder(&request);
                recorded.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    if status < 400 { "OK" } else { "Error" },
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url,
            requests,
            handle,
        }
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }

    pub fn archive_url(&self) -> String {
        format!("{}/v1/archive", self.base_url)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockOpenMeteo {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn parse_request(raw: &str) -> RecordedRequest {
    let mut lines = raw.lines();
    let target = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default();
    let (path, raw_query) = target.split_once('?').unwrap_or((target, ""));
    let query = raw_query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let user_agent = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
        .map(|(_, value)| value.trim().to_string());

    RecordedRequest {
        path: path.to_string(),
        query,
        raw_query: raw_query.to_string(),
        user_agent,
    }
}

/// Hourly time stamps covering `start_date 00:00` through `end_date 23:00`.
pub fn hourly_times(request: &RecordedRequest) -> Vec<String> {
    let parse = |key: &str| NaiveDate::parse_from_str(&request.query[key], "%Y-%m-%d").unwrap();
    let start = parse("start_date").and_hms_opt(0, 0, 0).unwrap();
    let end = parse("end_date").and_hms_opt(23, 0, 0).unwrap();
    let count = (end - start).num_hours() + 1;
    (0..count)
        .map(|h| (start + Duration::hours(h)).format("%Y-%m-%dT%H:%M").to_string())
        .collect()
}

/// A complete Open-Meteo style body where the requested field holds `1.0, 2.0, ...`,
/// offset by `year_offset(year)` so columns can be told apart.
pub fn full_body(request: &RecordedRequest) -> Value {
    let times = hourly_times(request);
    let field = request.query["hourly"].clone();
    let year: f64 = request.query["start_date"][..4].parse().unwrap();
    let values: Vec<f64> = (1..=times.len()).map(|v| v as f64 + year_offset(year)).collect();
    let mut hourly = Map::new();
    hourly.insert("time".to_string(), json!(times));
    hourly.insert(field, json!(values));
    json!({
        "latitude": request.query["latitude"].parse::<f64>().unwrap(),
        "longitude": request.query["longitude"].parse::<f64>().unwrap(),
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "hourly_units": { "time": "iso8601" },
        "hourly": hourly
    })
}

pub fn year_offset(year: f64) -> f64 {
    (year - 2000.0) * 1000.0
}

pub fn ok_full(request: &RecordedRequest) -> (u16, String) {
    (200, full_body(request).to_string())
}
