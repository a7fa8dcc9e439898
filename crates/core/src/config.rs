use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "pawcast.toml";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub health_check_port: u16,
    pub graceful_shutdown_secs: u64,
}

/// Credentials and timeouts for the third-party data providers the server
/// proxies. Only the OpenWeather key is mandatory; routes backed by the other
/// providers report unavailability at request time when their key is absent.
#[derive(Clone, Debug)]
pub struct ProvidersConfig {
    pub openweather_api_key: SecretString,
    pub naver_client_id: Option<String>,
    pub naver_client_secret: Option<SecretString>,
    pub google_maps_api_key: Option<SecretString>,
    pub youtube_api_key: Option<SecretString>,
    pub request_timeout_secs: u64,
}

/// External auth-as-a-service endpoint used to verify bearer tokens.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub base_url: Option<String>,
    pub api_key: Option<SecretString>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub database_url: Option<String>,
    pub log_level: Option<String>,
    pub openweather_api_key: Option<String>,
    pub naver_client_id: Option<String>,
    pub naver_client_secret: Option<String>,
    pub google_maps_api_key: Option<String>,
    pub youtube_api_key: Option<String>,
    pub auth_base_url: Option<String>,
    pub auth_api_key: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub env: EnvSource,
    pub overrides: ConfigOverrides,
}

/// Where environment overrides are read from. Tests substitute a fixed map so
/// variables exported in the surrounding shell cannot leak into assertions.
#[derive(Clone, Debug, Default)]
pub enum EnvSource {
    #[default]
    Process,
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Process => env::var(key).ok(),
            Self::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://pawcast.db".to_string(),
                max_connections: 5,
                timeout_secs: 30,
            },
            server: ServerConfig {
                bind_address: "127.0.0.1".to_string(),
                port: 8300,
                health_check_port: 8301,
                graceful_shutdown_secs: 15,
            },
            providers: ProvidersConfig {
                openweather_api_key: String::new().into(),
                naver_client_id: None,
                naver_client_secret: None,
                google_maps_api_key: None,
                youtube_api_key: None,
                request_timeout_secs: 10,
            },
            auth: AuthConfig { base_url: None, api_key: None },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

/// File layout mirrored by `pawcast.toml`; every field optional so partial
/// files layer over the defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<FileDatabase>,
    server: Option<FileServer>,
    providers: Option<FileProviders>,
    auth: Option<FileAuth>,
    logging: Option<FileLogging>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDatabase {
    url: Option<String>,
    max_connections: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileServer {
    bind_address: Option<String>,
    port: Option<u16>,
    health_check_port: Option<u16>,
    graceful_shutdown_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileProviders {
    openweather_api_key: Option<String>,
    naver_client_id: Option<String>,
    naver_client_secret: Option<String>,
    google_maps_api_key: Option<String>,
    youtube_api_key: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileAuth {
    base_url: Option<String>,
    api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    format: Option<String>,
}

impl AppConfig {
    /// Resolution order: defaults, then the TOML file, then process
    /// environment, then programmatic overrides. Later layers win.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = options
            .config_path
            .or_else(|| options.env.get("PAWCAST_CONFIG").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let file: FileConfig = toml::from_str(&raw)
                    .map_err(|source| ConfigError::ParseFile { path: path.clone(), source })?;
                config.apply_file(file)?;
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                if options.require_file {
                    return Err(ConfigError::MissingConfigFile(path));
                }
            }
            Err(source) => return Err(ConfigError::ReadFile { path, source }),
        }

        config.apply_env(&options.env)?;
        config.apply_overrides(options.overrides)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(database) = file.database {
            apply(&mut self.database.url, database.url);
            apply(&mut self.database.max_connections, database.max_connections);
            apply(&mut self.database.timeout_secs, database.timeout_secs);
        }
        if let Some(server) = file.server {
            apply(&mut self.server.bind_address, server.bind_address);
            apply(&mut self.server.port, server.port);
            apply(&mut self.server.health_check_port, server.health_check_port);
            apply(&mut self.server.graceful_shutdown_secs, server.graceful_shutdown_secs);
        }
        if let Some(providers) = file.providers {
            if let Some(key) = providers.openweather_api_key {
                self.providers.openweather_api_key = key.into();
            }
            if providers.naver_client_id.is_some() {
                self.providers.naver_client_id = providers.naver_client_id;
            }
            if let Some(secret) = providers.naver_client_secret {
                self.providers.naver_client_secret = Some(secret.into());
            }
            if let Some(key) = providers.google_maps_api_key {
                self.providers.google_maps_api_key = Some(key.into());
            }
            if let Some(key) = providers.youtube_api_key {
                self.providers.youtube_api_key = Some(key.into());
            }
            apply(&mut self.providers.request_timeout_secs, providers.request_timeout_secs);
        }
        if let Some(auth) = file.auth {
            if auth.base_url.is_some() {
                self.auth.base_url = auth.base_url;
            }
            if let Some(key) = auth.api_key {
                self.auth.api_key = Some(key.into());
            }
        }
        if let Some(logging) = file.logging {
            apply(&mut self.logging.level, logging.level);
            if let Some(format) = logging.format {
                self.logging.format = format.parse()?;
            }
        }
        Ok(())
    }

    fn apply_env(&mut self, source: &EnvSource) -> Result<(), ConfigError> {
        if let Some(url) = source.get("PAWCAST_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(level) = source.get("PAWCAST_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = source.get("PAWCAST_LOG_FORMAT") {
            self.logging.format = format
                .parse()
                .map_err(|_| ConfigError::InvalidEnvOverride {
                    key: "PAWCAST_LOG_FORMAT".to_string(),
                    value: format,
                })?;
        }
        if let Some(address) = source.get("PAWCAST_BIND_ADDRESS") {
            self.server.bind_address = address;
        }
        if let Some(port) = source.get("PAWCAST_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "PAWCAST_PORT".to_string(),
                value: port,
            })?;
        }
        if let Some(port) = source.get("PAWCAST_HEALTH_PORT") {
            self.server.health_check_port =
                port.parse().map_err(|_| ConfigError::InvalidEnvOverride {
                    key: "PAWCAST_HEALTH_PORT".to_string(),
                    value: port,
                })?;
        }
        // Provider credentials keep the env names the deployment already uses.
        if let Some(key) = source.get("OPEN_WEATHER_API_KEY") {
            self.providers.openweather_api_key = key.into();
        }
        if let Some(id) = source.get("NAVER_CLIENT_ID") {
            self.providers.naver_client_id = Some(id);
        }
        if let Some(secret) = source.get("NAVER_CLIENT_SECRET") {
            self.providers.naver_client_secret = Some(secret.into());
        }
        if let Some(key) = source.get("GOOGLE_MAPS_API_KEY") {
            self.providers.google_maps_api_key = Some(key.into());
        }
        if let Some(key) = source.get("YOUTUBE_API_KEY") {
            self.providers.youtube_api_key = Some(key.into());
        }
        if let Some(url) = source.get("PAWCAST_AUTH_BASE_URL") {
            self.auth.base_url = Some(url);
        }
        if let Some(key) = source.get("PAWCAST_AUTH_API_KEY") {
            self.auth.api_key = Some(key.into());
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        apply(&mut self.database.url, overrides.database_url);
        apply(&mut self.logging.level, overrides.log_level);
        if let Some(key) = overrides.openweather_api_key {
            self.providers.openweather_api_key = key.into();
        }
        if overrides.naver_client_id.is_some() {
            self.providers.naver_client_id = overrides.naver_client_id;
        }
        if let Some(secret) = overrides.naver_client_secret {
            self.providers.naver_client_secret = Some(secret.into());
        }
        if let Some(key) = overrides.google_maps_api_key {
            self.providers.google_maps_api_key = Some(key.into());
        }
        if let Some(key) = overrides.youtube_api_key {
            self.providers.youtube_api_key = Some(key.into());
        }
        if overrides.auth_base_url.is_some() {
            self.auth.base_url = overrides.auth_base_url;
        }
        if let Some(key) = overrides.auth_api_key {
            self.auth.api_key = Some(key.into());
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Validation("database.url must not be empty".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address must not be empty".to_string(),
            ));
        }
        if self.server.port == self.server.health_check_port {
            return Err(ConfigError::Validation(
                "server.port and server.health_check_port must differ".to_string(),
            ));
        }
        if self.providers.openweather_api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Validation(
                "providers.openweather_api_key is required (OPEN_WEATHER_API_KEY)".to_string(),
            ));
        }
        Ok(())
    }
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
