//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of entries in a forecast, nearest day first
pub const FORECAST_DAYS: usize = 5;

/// French weekday labels, indexed from Sunday
pub const DAY_LABELS: [&str; 7] = ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"];

/// Daily weather forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Weekday label for display
    pub day: String,
    pub temp_max: i32,
    pub temp_min: i32,
    /// 0-100
    pub precipitation_chance: u8,
    pub condition: WeatherCondition,
}

impl DailyForecast {
    /// Drives the field-map rain highlight and irrigation advice
    pub fn rain_likely(&self) -> bool {
        self.precipitation_chance > 50
    }
}

/// Forecast conditions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "Sunny"),
            WeatherCondition::Cloudy => write!(f, "Cloudy"),
            WeatherCondition::Rainy => write!(f, "Rainy"),
            WeatherCondition::PartlyCloudy => write!(f, "Partly Cloudy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_wire_values() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"Partly Cloudy\"");
        let parsed: WeatherCondition = serde_json::from_str("\"Rainy\"").unwrap();
        assert_eq!(parsed, WeatherCondition::Rainy);
    }

    #[test]
    fn test_rain_likely_threshold() {
        let forecast = DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            day: "Sam".to_string(),
            temp_max: 31,
            temp_min: 23,
            precipitation_chance: 50,
            condition: WeatherCondition::Cloudy,
        };
        assert!(!forecast.rain_likely());

        let wetter = DailyForecast {
            precipitation_chance: 51,
            ..forecast
        };
        assert!(wetter.rain_likely());
    }
}
