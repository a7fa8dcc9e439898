use serde::{Deserialize, Serialize};

pub const KELVIN_OFFSET: f64 = 273.15;

/// Snapshot of the five environmental measurements scored for walkability.
///
/// Constructed fresh from each provider response and never mutated; all
/// downstream computation borrows it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Meters per second.
    pub wind_speed: f64,
    /// µg/m³.
    pub pm10: f64,
    /// µg/m³.
    pub pm25: f64,
}

impl EnvReading {
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64, pm10: f64, pm25: f64) -> Self {
        Self { temperature, humidity, wind_speed, pm10, pm25 }
    }

    /// Same reading with the temperature supplied in Kelvin, as OpenWeather
    /// delivers it.
    pub fn with_kelvin(
        temperature_k: f64,
        humidity: f64,
        wind_speed: f64,
        pm10: f64,
        pm25: f64,
    ) -> Self {
        Self::new(temperature_k - KELVIN_OFFSET, humidity, wind_speed, pm10, pm25)
    }
}
