/// Process configuration read from the environment (and `.env` when present).
use std::env;
use std::time::Duration;

use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

const DEFAULT_MAX_CONNECTIONS: u32 = 25;
const DEFAULT_MIN_IDLE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let url = url.into();
        validate_database_url(&url)?;
        Ok(Self {
            url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_idle: DEFAULT_MIN_IDLE,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(300), // Close idle connections after 5 minutes
            max_lifetime: Duration::from_secs(1800), // Replace connections after 30 minutes
        })
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_idle: u32) -> AppResult<Self> {
        if max_connections == 0 {
            return Err(AppError::ValidationError(
                "max connections must be positive".to_string(),
            ));
        }
        if min_idle > max_connections {
            return Err(AppError::ValidationError(format!(
                "min idle ({}) cannot exceed max connections ({})",
                min_idle, max_connections
            )));
        }
        self.max_connections = max_connections;
        self.min_idle = min_idle;
        Ok(self)
    }

    /// Host part of the URL, safe to log.
    pub fn redacted_host(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the environment.
    ///
    /// `DATABASE_URL` wins; otherwise the URL is assembled from
    /// `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST`, `POSTGRES_PORT`
    /// and `POSTGRES_DB`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => Self::url_from_parts()?,
        };

        let max_connections = read_number("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let min_idle = read_number("DATABASE_MIN_IDLE", DEFAULT_MIN_IDLE)?;
        let connect_timeout =
            read_number("DATABASE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;

        let mut database = DatabaseConfig::new(url)?.with_pool_size(max_connections, min_idle)?;
        database.connect_timeout = Duration::from_secs(connect_timeout);

        log_info!(
            "Configuration loaded for database at: {}",
            database.redacted_host()
        );

        Ok(Self { database })
    }

    fn url_from_parts() -> AppResult<String> {
        let part = |key: &str| {
            env::var(key).map_err(|_| {
                AppError::ValidationError(format!(
                    "DATABASE_URL not set and {} environment variable not found",
                    key
                ))
            })
        };

        let user = part("POSTGRES_USER")?;
        let password = part("POSTGRES_PASSWORD")?;
        let host = part("POSTGRES_HOST")?;
        let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
        let db = part("POSTGRES_DB")?;

        Ok(compose_database_url(&user, &password, &host, &port, &db))
    }
}

pub fn compose_database_url(
    user: &str,
    password: &str,
    host: &str,
    port: &str,
    db: &str,
) -> String {
    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, db)
}

fn validate_database_url(url: &str) -> AppResult<()> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ValidationError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }
    Ok(())
}

fn read_number<T: std::str::FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::ValidationError(format!("{} must be a number, got '{}'", key, raw))
        }),
        Err(_) => Ok(default),
    }
}
