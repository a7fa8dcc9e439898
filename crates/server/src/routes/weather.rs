//! Raw provider pass-through routes: the UI's charting components consume the
//! OpenWeather payloads unmodified.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use pawcast_core::providers::{
    AirPollutionForecast, CurrentAirPollution, CurrentWeather, WeatherForecast,
};

use super::{ApiError, AppState};

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn validated(self) -> Result<Self, ApiError> {
        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(ApiError::BadRequest("lat/lon out of range".to_string()));
        }
        Ok(self)
    }
}

pub async fn current_weather(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let coords = coords.validated()?;
    Ok(Json(state.open_weather.current_weather(coords.lat, coords.lon).await?))
}

pub async fn forecast_weather(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<WeatherForecast>, ApiError> {
    let coords = coords.validated()?;
    Ok(Json(state.open_weather.forecast_weather(coords.lat, coords.lon).await?))
}

pub async fn current_air(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<CurrentAirPollution>, ApiError> {
    let coords = coords.validated()?;
    Ok(Json(state.open_weather.current_air(coords.lat, coords.lon).await?))
}

pub async fn forecast_air(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<AirPollutionForecast>, ApiError> {
    let coords = coords.validated()?;
    Ok(Json(state.open_weather.forecast_air(coords.lat, coords.lon).await?))
}
