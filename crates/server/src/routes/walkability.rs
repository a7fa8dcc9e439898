//! Walkability endpoints: fetch the provider data and run the scoring core.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Serialize;

use pawcast_core::providers::reading_from_current;
use pawcast_core::{
    build_forecast_points, evaluate_forecast, evaluate_reading, EnvReading, ForecastPoint,
    WalkAssessment, WalkRecommendation,
};

use super::weather::Coordinates;
use super::{ApiError, AppState};
use crate::providers::ProviderError;

#[derive(Clone, Debug, Serialize)]
pub struct CurrentWalkabilityResponse {
    /// Location label from the weather provider.
    pub location: String,
    /// Condition code, e.g. "Clear".
    pub condition: String,
    pub reading: EnvReading,
    pub assessment: WalkAssessment,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForecastWalkabilityResponse {
    pub points: Vec<ForecastPoint>,
    pub recommendations: Vec<WalkRecommendation>,
}

pub async fn current(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<CurrentWalkabilityResponse>, ApiError> {
    let coords = coords.validated()?;
    let (weather, air) = tokio::try_join!(
        state.open_weather.current_weather(coords.lat, coords.lon),
        state.open_weather.current_air(coords.lat, coords.lon),
    )?;

    let reading = reading_from_current(&weather, &air).ok_or(ProviderError::Rejected {
        provider: "openweather",
        detail: "air pollution response carried no entries".to_string(),
    })?;

    let condition = weather
        .weather
        .first()
        .map(|condition| condition.main.clone())
        .unwrap_or_default();

    Ok(Json(CurrentWalkabilityResponse {
        location: weather.name,
        condition,
        reading,
        assessment: evaluate_reading(&reading),
    }))
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<ForecastWalkabilityResponse>, ApiError> {
    let coords = coords.validated()?;
    let (weather, air) = tokio::try_join!(
        state.open_weather.forecast_weather(coords.lat, coords.lon),
        state.open_weather.forecast_air(coords.lat, coords.lon),
    )?;

    let points = build_forecast_points(Some(&weather), Some(&air))?;
    let recommendations = evaluate_forecast(&points);

    Ok(Json(ForecastWalkabilityResponse { points, recommendations }))
}
