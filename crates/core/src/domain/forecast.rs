use serde::{Deserialize, Serialize};

/// One display-ready forecast slot: a weather entry joined with its
/// nearest-in-time air-quality entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// KST display label, e.g. "오후 3시".
    pub time: String,
    /// Provider condition code, e.g. "Clear" or "Rain".
    pub weather: String,
    /// Degrees Celsius.
    pub temp: f64,
    /// Precipitation probability, integer percent.
    pub pop: u8,
    pub pm10: f64,
    pub pm25: f64,
    pub humidity: f64,
    pub wind: f64,
}
