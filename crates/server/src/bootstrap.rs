use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::info;

use pawcast_core::config::{AppConfig, ConfigError, LoadOptions};
use pawcast_db::repositories::SqlSavedItemRepository;
use pawcast_db::{connect_with_settings, migrations, DbPool};

use crate::auth::HttpAuthVerifier;
use crate::providers::{GooglePlacesClient, NaverClient, OpenWeatherClient, YouTubeClient};
use crate::routes::AppState;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub state: AppState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
    #[error("http client initialization failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let db_pool = connect_with_settings(
        &config.database.url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await
    .map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        correlation_id = "bootstrap",
        "database connection established"
    );

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(
        event_name = "system.bootstrap.migrations_applied",
        correlation_id = "bootstrap",
        "database migrations applied"
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.providers.request_timeout_secs.max(1)))
        .build()
        .map_err(BootstrapError::HttpClient)?;

    let state = AppState {
        open_weather: OpenWeatherClient::new(
            http.clone(),
            config.providers.openweather_api_key.expose_secret().to_string().into(),
        ),
        naver: NaverClient::new(
            http.clone(),
            config.providers.naver_client_id.clone(),
            config
                .providers
                .naver_client_secret
                .as_ref()
                .map(|secret| secret.expose_secret().to_string().into()),
        ),
        places: GooglePlacesClient::new(
            http.clone(),
            config
                .providers
                .google_maps_api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string().into()),
        ),
        youtube: YouTubeClient::new(
            http.clone(),
            config
                .providers
                .youtube_api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string().into()),
        ),
        auth: Arc::new(HttpAuthVerifier::new(
            http,
            config.auth.base_url.clone(),
            config.auth.api_key.as_ref().map(|key| key.expose_secret().to_string().into()),
        )),
        saves: Arc::new(SqlSavedItemRepository::new(db_pool.clone())),
    };

    Ok(Application { config, db_pool, state })
}
