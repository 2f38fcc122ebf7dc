use chrono::NaiveDate;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use weather_trends::{ConfigError, LatLon, Measurement, TrendsConfig, ARCHIVE_URL, FORECAST_URL};

/// Compare the hourly weather forecast with the same days in past years.
#[derive(Debug, Parser)]
#[command(name = "Weather Trends", version)]
pub struct Args {
    /// The latitude of the location to check
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,

    /// The longitude of the location to check
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Switches from checking temperature to precipitation
    #[arg(short = 'p', long = "get_precip")]
    pub get_precip: bool,

    /// The number of days to check, 1-5
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub duration: i64,

    /// Comma separated list of past years to check, e.g. -y 2012,2010 [default: last year]
    #[arg(short, long, value_delimiter = ',')]
    pub years: Option<Vec<i32>>,

    /// Directory the CSV file is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, default_value = FORECAST_URL, hide = true)]
    pub forecast_url: String,

    #[arg(long, default_value = ARCHIVE_URL, hide = true)]
    pub archive_url: String,
}

impl Args {
    /// Parses `args`, accepting the single-dash `-lat`/`-lon` spellings.
    pub fn parse_legacy<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(args.into_iter().map(|a| rewrite_legacy_flag(a.into())))
    }

    pub fn measurement(&self) -> Measurement {
        if self.get_precip {
            Measurement::Precipitation
        } else {
            Measurement::Temperature
        }
    }

    pub fn to_config(&self, today: NaiveDate) -> Result<TrendsConfig, ConfigError> {
        TrendsConfig::builder()
            .location(LatLon(self.latitude, self.longitude))
            .duration_days(self.duration)
            .measurement(self.measurement())
            .today(today)
            .maybe_past_years(self.years.clone())
            .build()
    }
}

fn rewrite_legacy_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    for (short, long) in [("-lat", "--latitude"), ("-lon", "--longitude")] {
        if text == short {
            return long.into();
        }
        if let Some(value) = text.strip_prefix(short).and_then(|r| r.strip_prefix('=')) {
            return format!("{long}={value}").into();
        }
    }
    arg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_legacy_short_flags() {
        let args = Args::parse_legacy([
            "weather_trends", "-lat", "40.42", "-lon", "-79.79", "-d", "2", "-y", "2012,2010",
        ]);
        assert_eq!(args.latitude, 40.42);
        assert_eq!(args.longitude, -79.79);
        assert_eq!(args.duration, 2);
        assert_eq!(args.years, Some(vec![2012, 2010]));
        assert_eq!(args.measurement(), Measurement::Temperature);
    }

    #[test]
    fn test_long_flags_and_defaults() {
        let args = Args::parse_legacy([
            "weather_trends",
            "--latitude=40.42",
            "--longitude",
            "-79.79",
            "--get_precip",
        ]);
        assert_eq!(args.duration, 1);
        assert_eq!(args.years, None);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.forecast_url, FORECAST_URL);
        assert_eq!(args.archive_url, ARCHIVE_URL);
        assert_eq!(args.measurement(), Measurement::Precipitation);

        let config = args.to_config(today()).unwrap();
        assert_eq!(config.past_years(), &[2024]);
    }

    #[test]
    fn test_legacy_flag_with_equals() {
        let args = Args::parse_legacy(["weather_trends", "-lat=1.5", "-lon=-2.5", "-p"]);
        assert_eq!(args.latitude, 1.5);
        assert_eq!(args.longitude, -2.5);
        assert!(args.get_precip);
    }

    #[test]
    fn test_out_of_range_duration_is_a_config_error() {
        for duration in ["0", "6", "-3"] {
            let args = Args::parse_legacy([
                "weather_trends", "-lat", "40.42", "-lon", "-79.79", "-d", duration,
            ]);
            assert!(matches!(
                args.to_config(today()),
                Err(ConfigError::InvalidDuration(_))
            ));
        }
    }
}
