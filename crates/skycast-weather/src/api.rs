//! Serde mirrors of the OpenWeatherMap `data/2.5` response shapes.
//!
//! Only the fields the dashboard reads are declared; everything else in the
//! provider payloads is ignored. Fields the provider omits for some
//! stations (wind, country) are `Option` here, with fallbacks applied at
//! the rendering boundary.

use serde::Deserialize;

/// `/weather` response: current conditions for a city.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub name: String,
    pub dt: i64,
    pub coord: Coordinates,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub wind: Option<WindReadings>,
    pub sys: SysInfo,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindReadings {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

/// `/forecast` response: 3-hourly samples covering about five days.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    pub city: CityInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub wind: Option<WindReadings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityInfo {
    pub name: String,
    pub country: Option<String>,
}

/// `/air_pollution` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PollutionResponse {
    #[serde(default)]
    pub list: Vec<PollutionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollutionEntry {
    pub main: PollutionIndex,
    pub components: PollutionComponents,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PollutionIndex {
    pub aqi: u8,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PollutionComponents {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
}
