//! Place routes: nearby search joined with transit distances, reverse
//! geocoding for the location label, and per-place details.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::weather::Coordinates;
use super::{ApiError, AppState};
use crate::providers::{
    DistanceMatrixResponse, GeocodeResponse, NearbyPlace, PlaceDetails, PlaceLocation,
};

#[derive(Debug, Deserialize)]
pub struct PlacesQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub query: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub distance: String,
    pub duration: String,
    pub location: PlaceLocation,
}

pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<PlacesQuery>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let (lat, lon) = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ApiError::BadRequest("lat and lon are required".to_string())),
    };
    let keyword = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .ok_or_else(|| ApiError::BadRequest("query is required".to_string()))?;

    let nearby = state.places.nearby_search(lat, lon, keyword).await?;
    if nearby.results.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let destinations: Vec<PlaceLocation> =
        nearby.results.iter().map(|place| place.geometry.location.clone()).collect();
    let distances = state.places.transit_distances(lat, lon, &destinations).await?;

    Ok(Json(combine_places(nearby.results, &distances)))
}

/// Pairs each place with its distance-matrix element by position; a missing
/// element degrades to "N/A" rather than dropping the place.
pub fn combine_places(
    places: Vec<NearbyPlace>,
    distances: &DistanceMatrixResponse,
) -> Vec<PlaceResult> {
    let elements = distances.rows.first().map(|row| row.elements.as_slice()).unwrap_or(&[]);

    places
        .into_iter()
        .enumerate()
        .map(|(index, place)| {
            let element = elements.get(index);
            let distance = element
                .and_then(|element| element.distance.as_ref())
                .map(|value| value.text.clone())
                .unwrap_or_else(|| "N/A".to_string());
            let duration = element
                .and_then(|element| element.duration.as_ref())
                .map(|value| value.text.clone())
                .unwrap_or_else(|| "N/A".to_string());

            PlaceResult {
                id: place.place_id,
                name: place.name,
                vicinity: place.vicinity,
                distance,
                duration,
                location: place.geometry.location,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub address: String,
}

const ADDRESS_NOT_FOUND: &str = "주소를 찾을 수 없습니다.";

pub async fn address(
    State(state): State<AppState>,
    Query(coords): Query<Coordinates>,
) -> Result<Json<AddressResponse>, ApiError> {
    let coords = coords.validated()?;
    let geocoded = state.places.reverse_geocode(coords.lat, coords.lon).await?;
    Ok(Json(AddressResponse { address: extract_address(geocoded) }))
}

/// The UI shows a placeholder label instead of an error when the coordinates
/// resolve to nothing.
pub fn extract_address(response: GeocodeResponse) -> String {
    if response.status == "OK" {
        if let Some(first) = response.results.into_iter().next() {
            return first.formatted_address;
        }
    }
    ADDRESS_NOT_FOUND.to_string()
}

pub async fn details(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<PlaceDetails>, ApiError> {
    let place_id = place_id.trim();
    if place_id.is_empty() {
        return Err(ApiError::BadRequest("place_id is required".to_string()));
    }
    Ok(Json(state.places.place_details(place_id).await?))
}
