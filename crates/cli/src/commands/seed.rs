use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::commands::CommandResult;
use pawcast_core::config::{AppConfig, LoadOptions};
use pawcast_core::domain::saved::{ContentType, SavedItem, SavedItemId};
use pawcast_db::repositories::{SavedItemRepository, SqlSavedItemRepository};
use pawcast_db::{connect_with_settings, migrations};

const DEMO_USER_ID: &str = "demo-user";

/// Deterministic fixtures: same ids, timestamps, and payloads on every run,
/// so repeated seeding is a no-op thanks to the repository upsert.
fn demo_items() -> Vec<SavedItem> {
    let created_at = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).single().unwrap_or_else(Utc::now);
    vec![
        SavedItem {
            id: SavedItemId("seed-place-1".to_string()),
            user_id: DEMO_USER_ID.to_string(),
            content_type: ContentType::Place,
            content_id: "demo-place-namsan".to_string(),
            content_data: json!({
                "name": "남산공원",
                "vicinity": "서울 중구",
                "distance": "1.2km"
            }),
            created_at,
        },
        SavedItem {
            id: SavedItemId("seed-product-1".to_string()),
            user_id: DEMO_USER_ID.to_string(),
            content_type: ContentType::Product,
            content_id: "demo-product-harness".to_string(),
            content_data: json!({
                "title": "강아지 하네스 리드줄 세트",
                "lprice": "18900"
            }),
            created_at,
        },
        SavedItem {
            id: SavedItemId("seed-youtube-1".to_string()),
            user_id: DEMO_USER_ID.to_string(),
            content_type: ContentType::Youtube,
            content_id: "demo-video-walk".to_string(),
            content_data: json!({
                "title": "강아지 산책 훈련 기초",
                "channelTitle": "멍멍학교"
            }),
            created_at,
        },
    ]
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "seed",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let result = runtime.block_on(async {
        let pool = connect_with_settings(
            &config.database.url,
            config.database.max_connections,
            config.database.timeout_secs,
        )
        .await
        .map_err(|error| ("db_connectivity", error.to_string(), 4u8))?;
        migrations::run_pending(&pool)
            .await
            .map_err(|error| ("migration", error.to_string(), 5u8))?;

        let repository = SqlSavedItemRepository::new(pool.clone());
        let items = demo_items();
        let count = items.len();
        for item in items {
            repository
                .save(item)
                .await
                .map_err(|error| ("seed_write", error.to_string(), 6u8))?;
        }
        pool.close().await;
        Ok::<usize, (&'static str, String, u8)>(count)
    });

    match result {
        Ok(count) => CommandResult::success(
            "seed",
            format!("seeded {count} demo saved items for user `{DEMO_USER_ID}`"),
        ),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("seed", error_class, message, exit_code)
        }
    }
}
