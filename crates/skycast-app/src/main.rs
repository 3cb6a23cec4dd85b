use std::time::Duration;

use clap::Parser;

use skycast_core::{AppError, Config, ConfigError, WeatherError};
use skycast_weather::{ApiKeyStore, OwmClient};

mod cli;
mod dashboard;

#[tokio::main]
async fn main() {
    let args = cli::Cli::parse();

    if let Err(err) = run(args).await {
        tracing::error!("{}", err);
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }
}

async fn run(args: cli::Cli) -> Result<(), AppError> {
    skycast_core::init()?;

    if let Some(key) = args.set_key {
        ApiKeyStore::store(&key)?;
        println!("API key saved.");
        return Ok(());
    }
    if args.forget_key {
        ApiKeyStore::delete()?;
        println!("Stored API key removed.");
        return Ok(());
    }

    let (config, _) = Config::load_validated()?;

    let city = args
        .city
        .unwrap_or_else(|| config.default_city.trim().to_string());
    if city.is_empty() {
        return Err(ConfigError::MissingSetting("default_city".to_string()).into());
    }
    let days = args.days.unwrap_or(config.forecast_days) as usize;
    let units = args.units.map(Into::into).unwrap_or(config.units);

    let api_key = ApiKeyStore::resolve()?.ok_or(WeatherError::MissingApiKey)?;
    let client = OwmClient::new(
        api_key,
        units,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let dash = dashboard::fetch(&client, &city, days).await?;
    print!("{}", dashboard::render(&dash, units));

    Ok(())
}
