//! OpenWeatherMap `data/2.5` API client.

use std::time::Duration;

use tracing::instrument;

use skycast_core::{Units, WeatherError};

use crate::api::{ForecastResponse, PollutionResponse, WeatherResponse};

const OWM_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the provider's current-weather, forecast, and air-pollution
/// endpoints.
///
/// The API key is an explicit constructor argument, never a global.
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: reqwest::Client,
    api_key: String,
    units: Units,
    base_url: String,
}

impl OwmClient {
    pub fn new(
        api_key: impl Into<String>,
        units: Units,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            units,
            base_url: OWM_API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    fn new_with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            units: Units::Metric,
            base_url: base_url.to_string(),
        }
    }

    /// Current conditions for a city.
    #[instrument(skip(self), level = "info")]
    pub async fn current_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.query_value()),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;

        self.handle_response(response, Some(city)).await
    }

    /// 3-hourly forecast samples for a city, about five days out.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, city: &str) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.query_value()),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;

        self.handle_response(response, Some(city)).await
    }

    /// Air pollution readings for coordinates (taken from a current-weather
    /// response).
    #[instrument(skip(self), level = "info")]
    pub async fn air_pollution(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<PollutionResponse, WeatherError> {
        let url = format!("{}/air_pollution", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        // 404 here is a provider fault, not a bad city name
        self.handle_response(response, None).await
    }

    /// Map provider status codes onto the error taxonomy.
    ///
    /// `city` is the looked-up name for endpoints where a 404 means the
    /// city does not exist; `None` turns 404 into a plain API error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        city: Option<&str>,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::InvalidResponse(format!("JSON parse error: {}", e)))
        } else if status.as_u16() == 401 {
            Err(WeatherError::InvalidApiKey)
        } else if status.as_u16() == 404 {
            match city {
                Some(city) => Err(WeatherError::CityNotFound(city.to_string())),
                None => {
                    let text = response.text().await.unwrap_or_default();
                    Err(WeatherError::Api(format!("{}: {}", status, text)))
                }
            }
        } else if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            Err(WeatherError::RateLimited(retry_after))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(WeatherError::Api(format!("{}: {}", status, text)))
        }
    }
}
