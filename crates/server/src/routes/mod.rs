pub mod places;
pub mod saves;
pub mod search;
pub mod walkability;
pub mod weather;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use serde_json::json;
use thiserror::Error;

use pawcast_core::errors::ForecastError;
use pawcast_db::repositories::{RepositoryError, SavedItemRepository};

use crate::auth::{AuthError, AuthVerifier};
use crate::providers::{
    GooglePlacesClient, NaverClient, OpenWeatherClient, ProviderError, YouTubeClient,
};

#[derive(Clone)]
pub struct AppState {
    pub open_weather: OpenWeatherClient,
    pub naver: NaverClient,
    pub places: GooglePlacesClient,
    pub youtube: YouTubeClient,
    pub auth: Arc<dyn AuthVerifier>,
    pub saves: Arc<dyn SavedItemRepository>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather/current", get(weather::current_weather))
        .route("/api/weather/forecast", get(weather::forecast_weather))
        .route("/api/air/current", get(weather::current_air))
        .route("/api/air/forecast", get(weather::forecast_air))
        .route("/api/walkability/current", get(walkability::current))
        .route("/api/walkability/forecast", get(walkability::forecast))
        .route("/api/products", get(search::products))
        .route("/api/websearch", get(search::websearch))
        .route("/api/youtube", get(search::youtube))
        .route("/api/address", get(places::address))
        .route("/api/places", get(places::nearby))
        .route("/api/places/{place_id}", get(places::details))
        .route("/api/saves", get(saves::list).post(saves::create))
        .route("/api/saves/{id}", delete(saves::remove))
        .with_state(state)
}

/// Request-level failure mapped onto an HTTP status and a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::MissingToken | AuthError::InvalidToken => Self::Unauthorized,
            AuthError::NotConfigured => {
                Self::Provider(ProviderError::MissingCredentials { provider: "auth" })
            }
            AuthError::Unavailable(detail) => {
                Self::Provider(ProviderError::Rejected { provider: "auth", detail })
            }
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Provider(ProviderError::MissingCredentials { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Provider(_) | Self::Forecast(_) => StatusCode::BAD_GATEWAY,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show callers; provider/internal detail stays in logs.
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message) => message.clone(),
            Self::Unauthorized => "authentication required".to_string(),
            Self::NotFound => "not found".to_string(),
            Self::Provider(ProviderError::MissingCredentials { provider }) => {
                format!("{provider} integration is not configured")
            }
            Self::Provider(_) | Self::Forecast(_) => "upstream data unavailable".to_string(),
            Self::Repository(_) => "internal error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(
                event_name = "api.request.failed",
                status = %status,
                error = %self,
                "request failed"
            );
        } else {
            tracing::warn!(
                event_name = "api.request.rejected",
                status = %status,
                error = %self,
                "request rejected"
            );
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
