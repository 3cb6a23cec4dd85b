pub mod config;
pub mod error;

pub use config::{Config, Units, ValidationResult};
pub use error::{AppError, ConfigError, WeatherError};

use anyhow::Result;

/// Initialize logging for the application.
///
/// Log output goes to stderr so the rendered dashboard on stdout stays clean.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::debug!("Skycast core initialized");
    Ok(())
}
