mod args;

use crate::args::Args;
use chrono::Local;
use env_logger::Env;
use std::error::Error;
use std::process::ExitCode;
use weather_trends::{ConfigError, WeatherTrends};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse_legacy(std::env::args_os());
    let config = match args.to_config(Local::now().date_naive()) {
        Ok(config) => config,
        Err(ConfigError::InvalidDuration(_)) => {
            println!("Invalid duration");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    let years: Vec<String> = std::iter::once(config.current_year())
        .chain(config.past_years().iter().copied())
        .map(|y| y.to_string())
        .collect();
    println!(
        "Getting the weather trends for {} in {}",
        config.month_day(),
        years.join(",")
    );

    let client = WeatherTrends::builder()
        .forecast_url(args.forecast_url.as_str())
        .archive_url(args.archive_url.as_str())
        .build();

    match client.run(&config, &args.output_dir).await {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &dyn Error) {
    eprintln!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
