//! Shopping, blog, and video search routes.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use pawcast_core::{categorize_title, ProductCategories};

use super::{ApiError, AppState};
use crate::providers::{NaverBlogItem, NaverShopItem, NAVER_SHOP_PAGE_SIZE};

fn require_query(query: &Option<String>) -> Result<&str, ApiError> {
    match query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(ApiError::BadRequest("query is required".to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub query: Option<String>,
    pub start: Option<u32>,
}

/// A shop result carrying its category tags for client-side filtering.
#[derive(Clone, Debug, Serialize)]
pub struct CategorizedProduct {
    #[serde(flatten)]
    pub item: NaverShopItem,
    pub categories: ProductCategories,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<CategorizedProduct>,
    /// Cursor for the next page, absent when the results are exhausted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_start: Option<u32>,
}

pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let query = require_query(&params.query)?;
    let start = params.start.unwrap_or(1).max(1);

    let response = state.naver.shop_search(query, start).await?;
    Ok(Json(categorize_page(response.items, start, response.total)))
}

/// Tags every title and computes the next paging cursor.
pub fn categorize_page(items: Vec<NaverShopItem>, start: u32, total: u32) -> ProductsResponse {
    let products = items
        .into_iter()
        .map(|item| CategorizedProduct { categories: categorize_title(&item.title), item })
        .collect();

    let next_start = start.checked_add(NAVER_SHOP_PAGE_SIZE).filter(|next| *next <= total);
    ProductsResponse { products, next_start }
}

#[derive(Debug, Deserialize)]
pub struct WebSearchQuery {
    pub query: Option<String>,
    pub start: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct WebSearchResponse {
    pub total: u32,
    pub results: Vec<NaverBlogItem>,
}

pub async fn websearch(
    State(state): State<AppState>,
    Query(params): Query<WebSearchQuery>,
) -> Result<Json<WebSearchResponse>, ApiError> {
    let query = require_query(&params.query)?;
    let start = params.start.unwrap_or(1).max(1);

    let response = state.naver.blog_search(query, start).await?;
    Ok(Json(WebSearchResponse { total: response.total, results: response.items }))
}

#[derive(Debug, Deserialize)]
pub struct YouTubeQuery {
    pub query: Option<String>,
    pub page_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub channel_title: String,
}

#[derive(Debug, Serialize)]
pub struct YouTubeResponse {
    pub videos: Vec<VideoResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

pub async fn youtube(
    State(state): State<AppState>,
    Query(params): Query<YouTubeQuery>,
) -> Result<Json<YouTubeResponse>, ApiError> {
    let query = require_query(&params.query)?;

    let response = state.youtube.search(query, params.page_token.as_deref()).await?;
    let videos = response
        .items
        .into_iter()
        .filter_map(|item| {
            // Non-video results come back without a videoId; skip them.
            let id = item.id.video_id?;
            Some(VideoResult {
                id,
                title: item.snippet.title,
                thumbnail_url: item.snippet.thumbnails.high.url,
                channel_title: item.snippet.channel_title,
            })
        })
        .collect();

    Ok(Json(YouTubeResponse { videos, next_page_token: response.next_page_token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_item(title: &str) -> NaverShopItem {
        NaverShopItem {
            title: title.to_string(),
            link: "https://shop.example/1".to_string(),
            image: "https://img.example/1".to_string(),
            lprice: "15900".to_string(),
            mall_name: "펫샵".to_string(),
            product_id: "p-1".to_string(),
        }
    }

    #[test]
    fn page_items_are_tagged_by_title() {
        let page = categorize_page(vec![shop_item("강아지 사료와 장난감")], 1, 100);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].categories.food, vec!["사료"]);
        assert_eq!(page.products[0].categories.toy, vec!["장난감"]);
    }

    #[test]
    fn next_start_advances_by_page_size_until_exhausted() {
        let page = categorize_page(vec![shop_item("사료")], 1, 100);
        assert_eq!(page.next_start, Some(21));

        let last_page = categorize_page(vec![shop_item("사료")], 81, 100);
        assert_eq!(last_page.next_start, None);
    }

    #[test]
    fn missing_query_is_a_bad_request() {
        assert!(require_query(&None).is_err());
        assert!(require_query(&Some("  ".to_string())).is_err());
        assert_eq!(require_query(&Some(" 사료 ".to_string())).expect("ok"), "사료");
    }
}
