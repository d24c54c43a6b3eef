//! Weather forecast provider
//!
//! Real weather integration is out of scope; [`MockWeatherProvider`]
//! reproduces the deterministic generator of the original service so the
//! field map and advisory text have stable data to render.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};

use shared::models::{DailyForecast, WeatherCondition, DAY_LABELS, FORECAST_DAYS};
use shared::types::GpsCoordinates;
use shared::validation::validate_coordinates;

use crate::error::{AppError, AppResult};

/// Produces a forecast of exactly [`FORECAST_DAYS`] entries, nearest day first
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(&self, location: &GpsCoordinates) -> AppResult<Vec<DailyForecast>>;
}

const CONDITION_CYCLE: [WeatherCondition; 4] = [
    WeatherCondition::Sunny,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Rainy,
    WeatherCondition::Cloudy,
];

/// Deterministic forecast generator derived from the coordinates
pub struct MockWeatherProvider;

impl MockWeatherProvider {
    /// Forecast starting from an explicit date, for reproducible tests
    pub fn forecast_from(&self, location: &GpsCoordinates, start: NaiveDate) -> Vec<DailyForecast> {
        let lat = location.latitude;
        let lon = location.longitude;
        (0..FORECAST_DAYS)
            .map(|i| {
                let date = start + Duration::days(i as i64);
                let offset = i as f64;
                let temp_max = (30.0 + lat.rem_euclid(5.0) - offset).round() as i32;
                let temp_min = (22.0 + lon.rem_euclid(4.0) - offset).round() as i32;
                let precipitation_chance =
                    (lat + lon + offset * 10.0).rem_euclid(80.0).round() as u8;
                let cycle_slot =
                    (lat + offset).rem_euclid(CONDITION_CYCLE.len() as f64).floor() as usize;
                let condition = if precipitation_chance > 50 {
                    WeatherCondition::Rainy
                } else {
                    CONDITION_CYCLE[cycle_slot]
                };
                DailyForecast {
                    date,
                    day: DAY_LABELS[date.weekday().num_days_from_sunday() as usize].to_string(),
                    temp_max,
                    temp_min,
                    precipitation_chance,
                    condition,
                }
            })
            .collect()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn forecast(&self, location: &GpsCoordinates) -> AppResult<Vec<DailyForecast>> {
        validate_coordinates(location).map_err(AppError::WeatherFetch)?;
        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "generating forecast"
        );
        Ok(self.forecast_from(location, chrono::Local::now().date_naive()))
    }
}

/// Whether the nearest forecast day announces rain
pub fn rain_expected(forecasts: &[DailyForecast]) -> bool {
    forecasts.first().map(DailyForecast::rain_likely).unwrap_or(false)
}

/// Irrigation advice for today's forecast
pub fn irrigation_advice(today: Option<&DailyForecast>) -> String {
    let Some(forecast) = today else {
        return "Données météo non disponibles pour le moment.".to_string();
    };
    if forecast.precipitation_chance > 60 {
        return format!(
            "Pluie forte attendue ({}% de chance). L'irrigation peut être suspendue pour aujourd'hui.",
            forecast.precipitation_chance
        );
    }
    if forecast.temp_max > 35 {
        return format!(
            "Très forte chaleur ({}°C). Assurez une irrigation suffisante pour éviter le stress hydrique.",
            forecast.temp_max
        );
    }
    if forecast.condition == WeatherCondition::Sunny && forecast.temp_max > 30 {
        return format!(
            "Journée ensoleillée et chaude ({}°C). Surveillez l'humidité du sol.",
            forecast.temp_max
        );
    }
    "Conditions météo stables. Continuez les opérations comme prévu.".to_string()
}
