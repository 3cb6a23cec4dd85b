//! Weather data access and reduction for Skycast
//!
//! Provides an OpenWeatherMap client, domain types for current conditions,
//! forecasts and air quality, the per-day forecast reduction, and display
//! formatting helpers.

pub mod api;
pub mod client;
pub mod forecast;
pub mod format;
pub mod storage;
pub mod types;

pub use client::OwmClient;
pub use forecast::{daily_forecast, select_daily_representatives, short_term_trend};
pub use storage::ApiKeyStore;
pub use types::*;
