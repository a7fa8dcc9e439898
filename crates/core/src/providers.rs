//! Contract types for the OpenWeather payloads the core consumes.
//!
//! Only the fields the scoring pipeline reads are modeled; everything else in
//! the provider responses is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::reading::EnvReading;

/// `GET /data/2.5/weather` — current conditions. Temperatures in Kelvin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub main: WeatherMain,
    pub wind: WeatherWind,
    pub weather: Vec<WeatherCondition>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub humidity: f64,
    pub feels_like: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
}

/// `GET /data/2.5/air_pollution` — current particulates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentAirPollution {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionEntry {
    pub components: AirComponents,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirComponents {
    pub pm10: f64,
    pub pm2_5: f64,
}

/// `GET /data/2.5/forecast` — 5 days at 3-hour steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub list: Vec<WeatherForecastEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecastEntry {
    /// UTC timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub dt_txt: String,
    pub main: WeatherMain,
    pub wind: WeatherWind,
    pub weather: Vec<WeatherCondition>,
    /// Precipitation probability as a 0–1 fraction.
    #[serde(default)]
    pub pop: f64,
}

/// `GET /data/2.5/air_pollution/forecast` — hourly over ~5 days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionForecast {
    pub list: Vec<AirPollutionForecastEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirPollutionForecastEntry {
    /// UTC epoch seconds.
    pub dt: i64,
    pub components: AirComponents,
}

/// Joins current weather and air-pollution responses into one reading,
/// converting the provider's Kelvin temperature to Celsius. `None` until both
/// responses carry the fields scoring needs.
pub fn reading_from_current(
    weather: &CurrentWeather,
    air: &CurrentAirPollution,
) -> Option<EnvReading> {
    let air_entry = air.list.first()?;
    Some(EnvReading::with_kelvin(
        weather.main.temp,
        weather.main.humidity,
        weather.wind.speed,
        air_entry.components.pm10,
        air_entry.components.pm2_5,
    ))
}
