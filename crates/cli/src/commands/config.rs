use pawcast_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

const REDACTED: &str = "********";

#[derive(Debug, Serialize)]
struct ConfigReport {
    database_url: String,
    server_bind_address: String,
    server_port: u16,
    health_check_port: u16,
    log_level: String,
    openweather_api_key: &'static str,
    naver_client_id: Option<String>,
    naver_client_secret: Option<&'static str>,
    google_maps_api_key: Option<&'static str>,
    youtube_api_key: Option<&'static str>,
    auth_base_url: Option<String>,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return serde_json::json!({
                "command": "config",
                "status": "error",
                "message": error.to_string(),
            })
            .to_string();
        }
    };

    let report = ConfigReport {
        database_url: config.database.url.clone(),
        server_bind_address: config.server.bind_address.clone(),
        server_port: config.server.port,
        health_check_port: config.server.health_check_port,
        log_level: config.logging.level.clone(),
        openweather_api_key: REDACTED,
        naver_client_id: config.providers.naver_client_id.clone(),
        naver_client_secret: config.providers.naver_client_secret.as_ref().map(|_| REDACTED),
        google_maps_api_key: config.providers.google_maps_api_key.as_ref().map(|_| REDACTED),
        youtube_api_key: config.providers.youtube_api_key.as_ref().map(|_| REDACTED),
        auth_base_url: config.auth.base_url.clone(),
    };

    serde_json::to_string_pretty(&report)
        .unwrap_or_else(|error| format!("{{\"status\":\"error\",\"message\":\"{error}\"}}"))
}
