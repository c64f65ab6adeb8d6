//! Fixtures shared by forecast and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::models::*;
use super::service::{ForecastError, ForecastProvider};

/// A well-formed payload with `hours` identical mild, dry, clear hours
pub fn sample_payload(hours: usize) -> ProviderForecast {
    ProviderForecast {
        latitude: 47.37,
        longitude: 8.55,
        timezone: Some("Europe/Zurich".to_string()),
        current: Some(ProviderCurrent {
            time: Some("2026-06-01T00:00".to_string()),
            temperature_2m: Some(21.0),
            wind_speed_10m: Some(8.0),
            precipitation: Some(0.0),
            weather_code: Some(1),
            snow_depth: None,
        }),
        hourly: Some(ProviderHourly {
            time: Some(
                (0..hours)
                    .map(|h| format!("2026-06-{:02}T{:02}:00", 1 + h / 24, h % 24))
                    .collect(),
            ),
            temperature_2m: Some(vec![Some(22.0); hours]),
            wind_speed_10m: Some(vec![Some(10.0); hours]),
            precipitation: Some(vec![Some(0.0); hours]),
            weather_code: Some(vec![Some(1); hours]),
            snow_depth: None,
        }),
        daily: None,
    }
}

/// Returns a canned payload and remembers the timezone it was asked for
pub struct StubProvider {
    payload: ProviderForecast,
    last_timezone: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn new(payload: ProviderForecast) -> Self {
        Self {
            payload,
            last_timezone: Mutex::new(None),
        }
    }

    pub fn last_timezone(&self) -> Option<String> {
        self.last_timezone.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForecastProvider for StubProvider {
    async fn fetch_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
        timezone: &str,
    ) -> Result<ProviderForecast, ForecastError> {
        *self.last_timezone.lock().unwrap() = Some(timezone.to_string());
        Ok(self.payload.clone())
    }
}
