//! Saved-items CRUD, scoped to the authenticated owner.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};

use crate::auth::{bearer_token, AuthError, CurrentUser};

use super::{ApiError, AppState};

async fn current_user(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let token = bearer_token(headers).ok_or(AuthError::MissingToken)?;
    Ok(state.auth.verify(token).await?)
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SavedItem>>, ApiError> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(state.saves.list_for_user(&user.id).await?))
}

#[derive(Debug, Deserialize)]
pub struct CreateSaveRequest {
    pub content_type: ContentType,
    pub content_id: String,
    pub content_data: serde_json::Value,
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateSaveRequest>,
) -> Result<(StatusCode, Json<SavedItem>), ApiError> {
    let user = current_user(&state, &headers).await?;
    if request.content_id.trim().is_empty() {
        return Err(ApiError::BadRequest("content_id is required".to_string()));
    }

    let item = SavedItem {
        id: SavedItemId(Uuid::new_v4().to_string()),
        user_id: user.id.clone(),
        content_type: request.content_type,
        content_id: request.content_id,
        content_data: request.content_data,
        created_at: Utc::now(),
    };
    state.saves.save(item.clone()).await?;

    // The upsert may have refreshed an existing row; report the stored state.
    let stored = state
        .saves
        .find(&user.id, item.content_type, &item.content_id)
        .await?
        .unwrap_or(item);

    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = current_user(&state, &headers).await?;
    let removed = state.saves.delete(&user.id, &SavedItemId(id)).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::util::ServiceExt;

    use pawcast_db::repositories::InMemorySavedItemRepository;

    use crate::auth::StaticAuthVerifier;
    use crate::providers::{
        GooglePlacesClient, NaverClient, OpenWeatherClient, YouTubeClient,
    };
    use crate::routes::{router, AppState};

    fn test_state() -> AppState {
        let http = reqwest::Client::new();
        AppState {
            open_weather: OpenWeatherClient::new(http.clone(), "test-key".to_string().into()),
            naver: NaverClient::new(http.clone(), None, None),
            places: GooglePlacesClient::new(http.clone(), None),
            youtube: YouTubeClient::new(http, None),
            auth: Arc::new(StaticAuthVerifier::default().with_user("tok-a", "user-a")),
            saves: Arc::new(InMemorySavedItemRepository::default()),
        }
    }

    fn save_request(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/saves")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).expect("request")
    }

    #[tokio::test]
    async fn saves_require_authentication() {
        let app = router(test_state());

        let response = app
            .oneshot(save_request(
                None,
                json!({"content_type": "product", "content_id": "p-1", "content_data": {}}),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_list_delete_round_trip() {
        let state = test_state();

        let response = router(state.clone())
            .oneshot(save_request(
                Some("tok-a"),
                json!({
                    "content_type": "youtube",
                    "content_id": "video-1",
                    "content_data": {"title": "강아지 산책 브이로그"}
                }),
            ))
            .await
            .expect("create response");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.expect("body").to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&body).expect("json");
        let id = created["id"].as_str().expect("id").to_string();

        let response = router(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/api/saves")
                    .header(header::AUTHORIZATION, "Bearer tok-a")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("list response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.expect("body").to_bytes();
        let listed: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(listed.as_array().expect("array").len(), 1);

        let response = router(state.clone())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/saves/{id}"))
                    .header(header::AUTHORIZATION, "Bearer tok-a")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("delete response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/saves/{id}"))
                    .header(header::AUTHORIZATION, "Bearer tok-a")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("second delete response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_content_id_is_rejected() {
        let response = router(test_state())
            .oneshot(save_request(
                Some("tok-a"),
                json!({"content_type": "web", "content_id": "  ", "content_data": {}}),
            ))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
