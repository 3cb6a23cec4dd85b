//! Fetch orchestration and terminal rendering of the dashboard sections.
//!
//! Mirrors the provider call order of the original flow: current conditions
//! first (which also yields the coordinates), then the forecast series,
//! then air pollution for those coordinates. Any failure surfaces as one
//! user-facing message in `main`.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

use skycast_core::{Units, WeatherError};
use skycast_weather::forecast::{daily_forecast, short_term_trend, TREND_POINTS};
use skycast_weather::format::{clock_time, long_date, round_temp, weekday_short};
use skycast_weather::{AirQuality, CurrentConditions, ForecastSample, OwmClient};

/// Everything one dashboard render needs, fetched in a single pass.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub current: CurrentConditions,
    pub trend: Vec<ForecastSample>,
    pub air: Option<AirQuality>,
    pub daily: Vec<ForecastSample>,
}

/// Fetch all dashboard data for a city.
pub async fn fetch(
    client: &OwmClient,
    city: &str,
    days: usize,
) -> Result<Dashboard, WeatherError> {
    let current = CurrentConditions::from(client.current_weather(city).await?);

    let forecast = client.forecast(city).await?;
    let samples: Vec<ForecastSample> = forecast.list.into_iter().map(Into::into).collect();
    tracing::debug!(samples = samples.len(), city = %current.city, "forecast fetched");

    let pollution = client
        .air_pollution(current.latitude, current.longitude)
        .await?;
    let air = AirQuality::from_response(&pollution);

    let trend = short_term_trend(&samples, TREND_POINTS).to_vec();
    let daily = daily_forecast(&samples, days);

    Ok(Dashboard {
        current,
        trend,
        air,
        daily,
    })
}

/// Render the dashboard for the local time zone.
pub fn render(dashboard: &Dashboard, units: Units) -> String {
    render_in(dashboard, units, &Local)
}

/// Render with an explicit time zone, so tests are machine-independent.
pub fn render_in<Tz: TimeZone>(dashboard: &Dashboard, units: Units, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    render_current(&mut out, &dashboard.current, units, tz);
    render_trend(&mut out, &dashboard.trend, units, tz);
    render_air_quality(&mut out, dashboard.air.as_ref());
    render_daily(&mut out, &dashboard.daily, units, tz);
    out
}

fn render_current<Tz: TimeZone>(out: &mut String, current: &CurrentConditions, units: Units, tz: &Tz)
where
    Tz::Offset: fmt::Display,
{
    let temp = units.temp_suffix();

    match &current.country {
        Some(country) => out.push_str(&format!("{}, {}\n", current.city, country)),
        None => out.push_str(&format!("{}\n", current.city)),
    }
    out.push_str(&format!(
        "{}\n\n",
        long_date(&to_zone(&current.observed_at, tz))
    ));

    let description = if current.description.is_empty() {
        current.condition().label().to_string()
    } else {
        current.description.clone()
    };
    out.push_str(&format!(
        "{} {}   {}{}  (feels like {}{})\n",
        current.condition().glyph(),
        description,
        round_temp(current.temp),
        temp,
        round_temp(current.feels_like),
        temp,
    ));

    // Missing wind readings display as calm rather than being dropped
    let wind = current.wind_speed.unwrap_or(0.0);
    out.push_str(&format!(
        "Wind {:.1} {}   Humidity {}%   Pressure {} hPa\n",
        wind,
        units.wind_suffix(),
        current.humidity,
        current.pressure,
    ));
    out.push_str(&format!(
        "Min {}{}   Max {}{}   Sunrise {}   Sunset {}\n",
        round_temp(current.temp_min),
        temp,
        round_temp(current.temp_max),
        temp,
        clock_time(&to_zone(&current.sunrise, tz)),
        clock_time(&to_zone(&current.sunset, tz)),
    ));
}

fn render_trend<Tz: TimeZone>(out: &mut String, trend: &[ForecastSample], units: Units, tz: &Tz)
where
    Tz::Offset: fmt::Display,
{
    if trend.is_empty() {
        return;
    }

    out.push_str("\nTemperature trend (24h)\n");
    for sample in trend {
        out.push_str(&format!(
            "  {}   {:>4}{}   feels {:>4}{}   humidity {:>3}%\n",
            clock_time(&to_zone(&sample.timestamp, tz)),
            round_temp(sample.temp),
            units.temp_suffix(),
            round_temp(sample.feels_like),
            units.temp_suffix(),
            sample.humidity,
        ));
    }
}

fn render_air_quality(out: &mut String, air: Option<&AirQuality>) {
    let Some(air) = air else {
        out.push_str("\nAir quality: unavailable\n");
        return;
    };

    out.push_str(&format!(
        "\nAir quality: {} (AQI {}/5)\n",
        air.level.label(),
        air.index
    ));
    out.push_str(&format!(
        "  PM2.5 {:>7.1} µg/m³   PM10 {:>7.1} µg/m³\n",
        air.pm2_5, air.pm10
    ));
    out.push_str(&format!(
        "  O3    {:>7.1} µg/m³   NO2  {:>7.1} µg/m³\n",
        air.o3, air.no2
    ));
    out.push_str(&format!(
        "  SO2   {:>7.1} µg/m³   CO   {:>7.1} µg/m³\n",
        air.so2, air.co
    ));
}

fn render_daily<Tz: TimeZone>(out: &mut String, daily: &[ForecastSample], units: Units, tz: &Tz)
where
    Tz::Offset: fmt::Display,
{
    if daily.is_empty() {
        return;
    }

    out.push_str(&format!("\n{}-day forecast\n", daily.len()));
    for sample in daily {
        out.push_str(&format!(
            "  {}  {}  {:>4}{}\n",
            weekday_short(&to_zone(&sample.timestamp, tz)),
            sample.condition().glyph(),
            round_temp(sample.temp),
            units.temp_suffix(),
        ));
    }
}

fn to_zone<Tz: TimeZone>(t: &DateTime<chrono::Utc>, tz: &Tz) -> DateTime<Tz> {
    t.with_timezone(tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn at(d: u32, hour: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
    }

    fn test_dashboard() -> Dashboard {
        let current = CurrentConditions {
            city: "Nashik".to_string(),
            country: Some("IN".to_string()),
            observed_at: at(1, 10),
            latitude: 19.9975,
            longitude: 73.7898,
            temp: 31.2,
            feels_like: 30.1,
            temp_min: 29.0,
            temp_max: 33.0,
            humidity: 38,
            pressure: 1006,
            wind_speed: None,
            condition_code: 800,
            description: "clear sky".to_string(),
            sunrise: at(1, 5) + chrono::Duration::minutes(54),
            sunset: at(1, 19),
        };
        let sample = |d: u32, h: u32, temp: f64, code: i64| ForecastSample {
            timestamp: at(d, h),
            temp,
            feels_like: temp + 1.0,
            humidity: 55,
            condition_code: code,
            wind_speed: Some(2.0),
        };
        Dashboard {
            current,
            trend: vec![sample(1, 12, 28.4, 800), sample(1, 15, 27.0, 500)],
            air: Some(AirQuality {
                index: 3,
                level: skycast_weather::AqiLevel::Moderate,
                pm2_5: 12.3,
                pm10: 15.8,
                o3: 68.7,
                no2: 0.8,
                so2: 0.6,
                co: 201.9,
            }),
            daily: vec![sample(2, 12, 29.5, 800), sample(3, 12, 26.0, 500)],
        }
    }

    #[test]
    fn test_render_current_section() {
        let text = render_in(&test_dashboard(), Units::Metric, &Utc);
        assert!(text.contains("Nashik, IN"));
        assert!(text.contains("Saturday, June 1, 2024"));
        assert!(text.contains("clear sky"));
        assert!(text.contains("31°C"));
        assert!(text.contains("(feels like 30°C)"));
        // Missing wind renders as calm
        assert!(text.contains("Wind 0.0 m/s"));
        assert!(text.contains("Sunrise 05:54"));
        assert!(text.contains("Sunset 19:00"));
    }

    #[test]
    fn test_render_trend_section() {
        let text = render_in(&test_dashboard(), Units::Metric, &Utc);
        assert!(text.contains("Temperature trend (24h)"));
        assert!(text.contains("12:00"));
        assert!(text.contains("humidity  55%"));
    }

    #[test]
    fn test_render_air_quality_section() {
        let text = render_in(&test_dashboard(), Units::Metric, &Utc);
        assert!(text.contains("Air quality: Moderate (AQI 3/5)"));
        assert!(text.contains("PM2.5    12.3 µg/m³"));
        assert!(text.contains("CO     201.9 µg/m³"));
    }

    #[test]
    fn test_render_air_quality_missing() {
        let mut dash = test_dashboard();
        dash.air = None;
        let text = render_in(&dash, Units::Metric, &Utc);
        assert!(text.contains("Air quality: unavailable"));
    }

    #[test]
    fn test_render_daily_section() {
        let text = render_in(&test_dashboard(), Units::Metric, &Utc);
        assert!(text.contains("2-day forecast"));
        assert!(text.contains("Sun"));
        assert!(text.contains("Mon"));
        assert!(text.contains("30°C")); // 29.5 rounds up
    }

    #[test]
    fn test_render_imperial_suffixes() {
        let text = render_in(&test_dashboard(), Units::Imperial, &Utc);
        assert!(text.contains("°F"));
        assert!(text.contains("mph"));
    }

    #[test]
    fn test_render_empty_series_sections_omitted() {
        let mut dash = test_dashboard();
        dash.trend.clear();
        dash.daily.clear();
        let text = render_in(&dash, Units::Metric, &Utc);
        assert!(!text.contains("Temperature trend"));
        assert!(!text.contains("forecast"));
    }
}
