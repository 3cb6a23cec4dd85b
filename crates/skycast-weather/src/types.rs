use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api;

/// Weather condition categories mapped from OpenWeatherMap condition ids
/// See: https://openweathermap.org/weather-conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl ConditionKind {
    /// Convert an OpenWeatherMap condition id to a ConditionKind.
    pub fn from_owm_code(code: i64) -> Self {
        match code {
            200..=299 => Self::Stormy,        // Thunderstorm
            300..=599 => Self::Rainy,         // Drizzle and Rain
            600..=699 => Self::Snowy,         // Snow
            700..=799 => Self::Cloudy,        // Atmosphere (fog, haze, ...)
            800 => Self::Sunny,               // Clear sky
            _ => Self::Cloudy,                // Clouds and unknown codes
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Stormy => "Stormy",
            Self::Snowy => "Snowy",
        }
    }

    /// Glyph used when rendering forecast rows
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::Cloudy => "☁",
            Self::Rainy => "🌧",
            Self::Stormy => "⛈",
            Self::Snowy => "❄",
        }
    }
}

/// Air quality index bands reported by the provider (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
    Unknown,
}

impl AqiLevel {
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }
}

/// One point-in-time forecast record.
///
/// Owned by the provider response and read-only to the forecast reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub condition_code: i64,
    /// The provider omits wind for some stations; the fallback (treat as
    /// zero) is applied where the value is displayed, not here.
    pub wind_speed: Option<f64>,
}

impl ForecastSample {
    pub fn condition(&self) -> ConditionKind {
        ConditionKind::from_owm_code(self.condition_code)
    }
}

impl From<api::ForecastEntry> for ForecastSample {
    fn from(entry: api::ForecastEntry) -> Self {
        Self {
            timestamp: utc_timestamp(entry.dt),
            temp: entry.main.temp,
            feels_like: entry.main.feels_like,
            humidity: entry.main.humidity,
            condition_code: entry.weather.first().map_or(800, |w| w.id),
            wind_speed: entry.wind.and_then(|w| w.speed),
        }
    }
}

/// Current conditions for a city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub observed_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
    pub wind_speed: Option<f64>,
    pub condition_code: i64,
    pub description: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl CurrentConditions {
    pub fn condition(&self) -> ConditionKind {
        ConditionKind::from_owm_code(self.condition_code)
    }
}

impl From<api::WeatherResponse> for CurrentConditions {
    fn from(resp: api::WeatherResponse) -> Self {
        let (condition_code, description) = resp
            .weather
            .first()
            .map_or((800, String::new()), |w| (w.id, w.description.clone()));

        Self {
            city: resp.name,
            country: resp.sys.country,
            observed_at: utc_timestamp(resp.dt),
            latitude: resp.coord.lat,
            longitude: resp.coord.lon,
            temp: resp.main.temp,
            feels_like: resp.main.feels_like,
            temp_min: resp.main.temp_min,
            temp_max: resp.main.temp_max,
            humidity: resp.main.humidity,
            pressure: resp.main.pressure,
            wind_speed: resp.wind.and_then(|w| w.speed),
            condition_code,
            description,
            sunrise: utc_timestamp(resp.sys.sunrise),
            sunset: utc_timestamp(resp.sys.sunset),
        }
    }
}

/// Air quality reading: index band plus pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirQuality {
    pub index: u8,
    pub level: AqiLevel,
    pub pm2_5: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

impl AirQuality {
    /// Build from the provider response; `None` if the reading list is empty.
    pub fn from_response(resp: &api::PollutionResponse) -> Option<Self> {
        let entry = resp.list.first()?;
        Some(Self {
            index: entry.main.aqi,
            level: AqiLevel::from_index(entry.main.aqi),
            pm2_5: entry.components.pm2_5,
            pm10: entry.components.pm10,
            o3: entry.components.o3,
            no2: entry.components.no2,
            so2: entry.components.so2,
            co: entry.components.co,
        })
    }
}

/// Convert provider epoch seconds to a UTC timestamp.
///
/// Out-of-range values clamp to the epoch rather than failing; the provider
/// only ever sends near-present timestamps.
pub(crate) fn utc_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
