use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Language shown before the citizen picks one.
pub const DEFAULT_LANGUAGE: &str = "Ro";
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataConfig,
    pub search: SearchConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: DataConfig::from_env()?,
            search: SearchConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the application data snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Built-in dataset bundled with the crate.
    Sample,
    Files {
        stations_csv: PathBuf,
        content_json: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub default_language: String,
    pub source: DataSource,
}

impl DataConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_language = env::var("APP_DEFAULT_LANGUAGE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let stations = env::var("APP_STATIONS_CSV").ok().filter(|v| !v.is_empty());
        let content = env::var("APP_CONTENT_JSON").ok().filter(|v| !v.is_empty());

        let source = match (stations, content) {
            (None, None) => DataSource::Sample,
            (Some(stations_csv), Some(content_json)) => DataSource::Files {
                stations_csv: PathBuf::from(stations_csv),
                content_json: PathBuf::from(content_json),
            },
            _ => return Err(ConfigError::IncompleteDataSource),
        };

        Ok(Self {
            default_language,
            source,
        })
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            source: DataSource::Sample,
        }
    }
}

/// Which resolver implementation backs polling-station search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    Exhaustive,
    Indexed,
}

impl SearchStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "linear" | "scan" => Some(Self::Exhaustive),
            "indexed" | "index" => Some(Self::Indexed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
    pub limit: usize,
}

impl SearchConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let strategy = match env::var("APP_SEARCH_STRATEGY") {
            Ok(raw) => SearchStrategy::parse(&raw).ok_or(ConfigError::InvalidSearchStrategy(raw))?,
            Err(_) => SearchStrategy::Indexed,
        };

        let limit = match env::var("APP_SEARCH_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidSearchLimit)?,
            Err(_) => DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self { strategy, limit })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::Indexed,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    IncompleteDataSource,
    InvalidSearchStrategy(String),
    InvalidSearchLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::IncompleteDataSource => write!(
                f,
                "APP_STATIONS_CSV and APP_CONTENT_JSON must be set together"
            ),
            ConfigError::InvalidSearchStrategy(value) => write!(
                f,
                "APP_SEARCH_STRATEGY '{}' is not one of: exhaustive, indexed",
                value
            ),
            ConfigError::InvalidSearchLimit => {
                write!(f, "APP_SEARCH_LIMIT must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_DEFAULT_LANGUAGE",
            "APP_STATIONS_CSV",
            "APP_CONTENT_JSON",
            "APP_SEARCH_STRATEGY",
            "APP_SEARCH_LIMIT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.data.default_language, "Ro");
        assert_eq!(config.data.source, DataSource::Sample);
        assert_eq!(config.search.strategy, SearchStrategy::Indexed);
        assert_eq!(config.search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn file_source_requires_both_paths() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_STATIONS_CSV", "stations.csv");
        let error = AppConfig::load().expect_err("content path missing");
        assert!(matches!(error, ConfigError::IncompleteDataSource));

        env::set_var("APP_CONTENT_JSON", "content.json");
        let config = AppConfig::load().expect("both paths present");
        assert_eq!(
            config.data.source,
            DataSource::Files {
                stations_csv: PathBuf::from("stations.csv"),
                content_json: PathBuf::from("content.json"),
            }
        );
        reset_env();
    }

    #[test]
    fn search_settings_are_validated() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEARCH_STRATEGY", "Linear");
        env::set_var("APP_SEARCH_LIMIT", "5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.search.strategy, SearchStrategy::Exhaustive);
        assert_eq!(config.search.limit, 5);

        env::set_var("APP_SEARCH_LIMIT", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidSearchLimit)
        ));

        env::set_var("APP_SEARCH_LIMIT", "5");
        env::set_var("APP_SEARCH_STRATEGY", "fuzzy");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidSearchStrategy(_))
        ));
        reset_env();
    }
}
