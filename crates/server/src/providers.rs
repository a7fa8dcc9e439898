//! HTTP clients for the third-party data providers.
//!
//! Each client is a thin wrapper over a shared `reqwest::Client`: build the
//! provider URL, attach credentials, decode the JSON payload, and surface
//! failures as `ProviderError`. No retries and no caching; the surrounding
//! routes simply report upstream failures to the caller.

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pawcast_core::providers::{
    AirPollutionForecast, CurrentAirPollution, CurrentWeather, WeatherForecast,
};

const OPENWEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";
const NAVER_BASE: &str = "https://openapi.naver.com/v1/search";
const GOOGLE_MAPS_BASE: &str = "https://maps.googleapis.com/maps/api";
const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Search queries are scoped to dog content before hitting the providers.
const DOG_QUERY_PREFIX: &str = "강아지";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} credentials are not configured")]
    MissingCredentials { provider: &'static str },
    #[error("request to {provider} failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: StatusCode },
    #[error("{provider} rejected the request: {detail}")]
    Rejected { provider: &'static str, detail: String },
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status { provider, status });
    }
    response.json::<T>().await.map_err(|source| ProviderError::Transport { provider, source })
}

/// OpenWeather: current weather, 5-day forecast, and air pollution.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: SecretString,
}

impl OpenWeatherClient {
    pub fn new(http: Client, api_key: SecretString) -> Self {
        Self { http, api_key }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        lat: f64,
        lon: f64,
    ) -> Result<T, ProviderError> {
        let provider = "openweather";
        let response = self
            .http
            .get(format!("{OPENWEATHER_BASE}/{path}"))
            .query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .query(&[("appid", self.api_key.expose_secret())])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;
        decode_json(provider, response).await
    }

    pub async fn current_weather(&self, lat: f64, lon: f64) -> Result<CurrentWeather, ProviderError> {
        self.get("weather", lat, lon).await
    }

    pub async fn forecast_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<WeatherForecast, ProviderError> {
        self.get("forecast", lat, lon).await
    }

    pub async fn current_air(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentAirPollution, ProviderError> {
        self.get("air_pollution", lat, lon).await
    }

    pub async fn forecast_air(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<AirPollutionForecast, ProviderError> {
        self.get("air_pollution/forecast", lat, lon).await
    }
}

/// Naver open API: shopping and blog search.
#[derive(Clone)]
pub struct NaverClient {
    http: Client,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
}

pub const NAVER_SHOP_PAGE_SIZE: u32 = 20;
const NAVER_BLOG_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NaverShopResponse {
    pub total: u32,
    pub start: u32,
    pub display: u32,
    pub items: Vec<NaverShopItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NaverShopItem {
    pub title: String,
    pub link: String,
    pub image: String,
    pub lprice: String,
    #[serde(rename = "mallName")]
    pub mall_name: String,
    #[serde(rename = "productId")]
    pub product_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NaverBlogResponse {
    pub total: u32,
    pub items: Vec<NaverBlogItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NaverBlogItem {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(rename = "bloggername")]
    pub blogger_name: String,
    #[serde(rename = "postdate")]
    pub post_date: String,
}

impl NaverClient {
    pub fn new(
        http: Client,
        client_id: Option<String>,
        client_secret: Option<SecretString>,
    ) -> Self {
        Self { http, client_id, client_secret }
    }

    fn credentials(&self) -> Result<(&str, &str), ProviderError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Ok((id.as_str(), secret.expose_secret())),
            _ => Err(ProviderError::MissingCredentials { provider: "naver" }),
        }
    }

    async fn search<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        display: u32,
        start: u32,
    ) -> Result<T, ProviderError> {
        let provider = "naver";
        let (client_id, client_secret) = self.credentials()?;
        let response = self
            .http
            .get(format!("{NAVER_BASE}/{endpoint}"))
            .header("X-Naver-Client-Id", client_id)
            .header("X-Naver-Client-Secret", client_secret)
            .query(&[
                ("query", format!("{DOG_QUERY_PREFIX} {query}")),
                ("display", display.to_string()),
                ("start", start.to_string()),
                ("sort", "sim".to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;
        decode_json(provider, response).await
    }

    pub async fn shop_search(
        &self,
        query: &str,
        start: u32,
    ) -> Result<NaverShopResponse, ProviderError> {
        self.search("shop.json", query, NAVER_SHOP_PAGE_SIZE, start).await
    }

    pub async fn blog_search(
        &self,
        query: &str,
        start: u32,
    ) -> Result<NaverBlogResponse, ProviderError> {
        self.search("blog.json", query, NAVER_BLOG_PAGE_SIZE, start).await
    }
}

/// Google Maps: nearby place search combined with transit distances.
#[derive(Clone)]
pub struct GooglePlacesClient {
    http: Client,
    api_key: Option<SecretString>,
}

const PLACES_RADIUS_METERS: u32 = 5000;
/// Place Details is billed per field, so only what the detail modal renders.
const PLACE_DETAILS_FIELDS: &str =
    "name,vicinity,formatted_phone_number,photos,rating,reviews,opening_hours,geometry";

#[derive(Clone, Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    pub geometry: PlaceGeometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
    #[serde(default)]
    pub opening_hours: Option<PlaceOpeningHours>,
    pub geometry: PlaceGeometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceReview {
    pub author_name: String,
    pub rating: f64,
    pub text: String,
    pub relative_time_description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaceOpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub rows: Vec<DistanceMatrixRow>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DistanceMatrixRow {
    #[serde(default)]
    pub elements: Vec<DistanceMatrixElement>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DistanceMatrixElement {
    #[serde(default)]
    pub distance: Option<DistanceMatrixValue>,
    #[serde(default)]
    pub duration: Option<DistanceMatrixValue>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DistanceMatrixValue {
    pub text: String,
}

impl GooglePlacesClient {
    pub fn new(http: Client, api_key: Option<SecretString>) -> Self {
        Self { http, api_key }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .ok_or(ProviderError::MissingCredentials { provider: "google_maps" })
    }

    pub async fn nearby_search(
        &self,
        lat: f64,
        lon: f64,
        keyword: &str,
    ) -> Result<NearbySearchResponse, ProviderError> {
        let provider = "google_maps";
        let response = self
            .http
            .get(format!("{GOOGLE_MAPS_BASE}/place/nearbysearch/json"))
            .query(&[
                ("location", format!("{lat},{lon}")),
                ("radius", PLACES_RADIUS_METERS.to_string()),
                ("keyword", keyword.to_string()),
                ("language", "ko".to_string()),
                ("key", self.api_key()?.to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;

        let payload: NearbySearchResponse = decode_json(provider, response).await?;
        match payload.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(payload),
            other => Err(ProviderError::Rejected {
                provider,
                detail: format!(
                    "{other}: {}",
                    payload.error_message.as_deref().unwrap_or("no detail")
                ),
            }),
        }
    }

    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<GeocodeResponse, ProviderError> {
        let provider = "google_maps";
        let response = self
            .http
            .get(format!("{GOOGLE_MAPS_BASE}/geocode/json"))
            .query(&[
                ("latlng", format!("{lat},{lon}")),
                ("language", "ko".to_string()),
                ("key", self.api_key()?.to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;
        decode_json(provider, response).await
    }

    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, ProviderError> {
        let provider = "google_maps";
        let response = self
            .http
            .get(format!("{GOOGLE_MAPS_BASE}/place/details/json"))
            .query(&[
                ("place_id", place_id.to_string()),
                ("language", "ko".to_string()),
                ("fields", PLACE_DETAILS_FIELDS.to_string()),
                ("key", self.api_key()?.to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;

        let PlaceDetailsResponse { status, error_message, result } =
            decode_json(provider, response).await?;
        match (status.as_str(), result) {
            ("OK", Some(details)) => Ok(details),
            (status, _) => Err(ProviderError::Rejected {
                provider,
                detail: format!("{status}: {}", error_message.as_deref().unwrap_or("no detail")),
            }),
        }
    }

    pub async fn transit_distances(
        &self,
        lat: f64,
        lon: f64,
        destinations: &[PlaceLocation],
    ) -> Result<DistanceMatrixResponse, ProviderError> {
        let provider = "google_maps";
        let destinations = destinations
            .iter()
            .map(|location| format!("{},{}", location.lat, location.lng))
            .collect::<Vec<_>>()
            .join("|");
        let response = self
            .http
            .get(format!("{GOOGLE_MAPS_BASE}/distancematrix/json"))
            .query(&[
                ("origins", format!("{lat},{lon}")),
                ("destinations", destinations),
                ("mode", "transit".to_string()),
                ("language", "ko".to_string()),
                ("key", self.api_key()?.to_string()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;
        decode_json(provider, response).await
    }
}

/// YouTube Data API v3 search.
#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: Option<SecretString>,
}

const YOUTUBE_PAGE_SIZE: u32 = 9;

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeSearchResponse {
    #[serde(default)]
    pub items: Vec<YouTubeSearchItem>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeSearchItem {
    pub id: YouTubeVideoId,
    pub snippet: YouTubeSnippet,
}

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeVideoId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeSnippet {
    pub title: String,
    #[serde(rename = "channelTitle")]
    pub channel_title: String,
    pub thumbnails: YouTubeThumbnails,
}

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeThumbnails {
    pub high: YouTubeThumbnail,
}

#[derive(Clone, Debug, Deserialize)]
pub struct YouTubeThumbnail {
    pub url: String,
}

impl YouTubeClient {
    pub fn new(http: Client, api_key: Option<SecretString>) -> Self {
        Self { http, api_key }
    }

    pub async fn search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<YouTubeSearchResponse, ProviderError> {
        let provider = "youtube";
        let api_key = self
            .api_key
            .as_ref()
            .map(|key| key.expose_secret().to_string())
            .ok_or(ProviderError::MissingCredentials { provider })?;

        let mut request = self.http.get(YOUTUBE_SEARCH_URL).query(&[
            ("key", api_key),
            ("part", "snippet".to_string()),
            ("q", format!("{DOG_QUERY_PREFIX} {query}")),
            ("type", "video".to_string()),
            ("maxResults", YOUTUBE_PAGE_SIZE.to_string()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ProviderError::Transport { provider, source })?;
        decode_json(provider, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn naver_client_without_credentials_reports_missing() {
        let client = NaverClient::new(Client::new(), None, None);
        let error = client.shop_search("사료", 1).await.expect_err("must fail");
        assert!(matches!(error, ProviderError::MissingCredentials { provider: "naver" }));
    }

    #[tokio::test]
    async fn youtube_client_without_key_reports_missing() {
        let client = YouTubeClient::new(Client::new(), None);
        let error = client.search("훈련", None).await.expect_err("must fail");
        assert!(matches!(error, ProviderError::MissingCredentials { provider: "youtube" }));
    }

    #[tokio::test]
    async fn places_client_without_key_reports_missing() {
        let client = GooglePlacesClient::new(Client::new(), None);
        let error = client.nearby_search(37.5, 127.0, "공원").await.expect_err("must fail");
        assert!(matches!(error, ProviderError::MissingCredentials { provider: "google_maps" }));

        let error = client.reverse_geocode(37.5, 127.0).await.expect_err("must fail");
        assert!(matches!(error, ProviderError::MissingCredentials { provider: "google_maps" }));

        let error = client.place_details("ChIJ-place").await.expect_err("must fail");
        assert!(matches!(error, ProviderError::MissingCredentials { provider: "google_maps" }));
    }

    #[test]
    fn place_details_decodes_with_optional_fields_absent() {
        let raw = r#"{"status": "OK", "result": {
            "name": "남산공원",
            "geometry": {"location": {"lat": 37.55, "lng": 126.99}}}}"#;
        let decoded: PlaceDetailsResponse = serde_json::from_str(raw).expect("decode");
        assert_eq!(decoded.status, "OK");
        let details = decoded.result.expect("result");
        assert_eq!(details.name, "남산공원");
        assert!(details.photos.is_empty());
        assert!(details.rating.is_none());
        assert!(details.opening_hours.is_none());
    }

    #[test]
    fn youtube_response_decodes_without_page_token() {
        let raw = r#"{"items": [{"id": {"videoId": "abc"}, "snippet": {
            "title": "강아지 산책", "channelTitle": "dogs",
            "thumbnails": {"high": {"url": "https://img"}}}}]}"#;
        let decoded: YouTubeSearchResponse = serde_json::from_str(raw).expect("decode");
        assert_eq!(decoded.items.len(), 1);
        assert!(decoded.next_page_token.is_none());
    }
}
