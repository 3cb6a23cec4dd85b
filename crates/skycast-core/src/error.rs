//! Centralized error types for the Skycast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for terminal display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Top-level application error type.
///
/// All errors in the Skycast application should be convertible to this type.
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for printing to the terminal.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => e.user_message().to_string(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.".to_string(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}

/// Weather provider errors (OpenWeatherMap API).
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("API key rejected")]
    InvalidApiKey,

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Provider error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    /// User-friendly error message for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => {
                "No API key configured. Get a free key at openweathermap.org/api \
                 and run `skycast --set-key <KEY>`."
                    .to_string()
            }
            Self::InvalidApiKey => {
                "Your OpenWeatherMap API key was rejected. \
                 Run `skycast --set-key <KEY>` with a valid key."
                    .to_string()
            }
            Self::CityNotFound(city) => {
                format!("Could not find weather for \"{}\". Please try another city.", city)
            }
            Self::RateLimited(secs) => {
                format!("Too many requests. Please wait {} seconds.", secs)
            }
            Self::Api(_) => "The weather service returned an error. Please try again.".to_string(),
            Self::InvalidResponse(_) => {
                "Received an unexpected response from the weather service.".to_string()
            }
            Self::Network(_) => "Network error. Check your internet connection.".to_string(),
        }
    }
}
