//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for
//! PostgreSQL using SQLx. Configuration can be built in code or read from the
//! `DATABASE_*` environment variables.

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the PostgreSQL connection pool
pub type DatabasePool = PgPool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use infra_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("postgres://localhost/jobly")
///     .max_connections(20)
///     .min_connections(5)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
    /// Idle timeout before closing a connection
    pub idle_timeout: Duration,
}

/// Raw `DATABASE_*` settings as read from the environment
#[derive(Debug, Default, Deserialize)]
struct DatabaseSettings {
    url: Option<String>,
    max_connections: Option<u32>,
    min_connections: Option<u32>,
    connect_timeout_secs: Option<u64>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// Defaults: 10 max connections, 2 min, 30s connect timeout, 30 min
    /// lifetime, 10 min idle timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(30),
            max_lifetime: Duration::from_secs(30 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }

    /// Loads configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Environment Variables
    ///
    /// * `DATABASE_URL` - PostgreSQL connection string (required)
    /// * `DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
    /// * `DATABASE_MIN_CONNECTIONS` - Idle connections kept open (default: 2)
    /// * `DATABASE_CONNECT_TIMEOUT_SECS` - Acquire timeout (default: 30)
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Configuration` if `DATABASE_URL` is missing or
    /// a numeric variable does not parse.
    pub fn from_env() -> Result<Self, DatabaseError> {
        dotenvy::dotenv().ok();
        Self::from_source(None)
    }

    /// Loads configuration from an explicit variable map instead of the
    /// process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, DatabaseError> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self, DatabaseError> {
        let settings: DatabaseSettings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DATABASE")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DatabaseError::Configuration(e.to_string()))?;

        let url = settings
            .url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DatabaseError::Configuration("DATABASE_URL is not set".to_string()))?;

        let mut config = Self::new(url);
        if let Some(max) = settings.max_connections {
            config = config.max_connections(max);
        }
        if let Some(min) = settings.min_connections {
            config = config.min_connections(min);
        }
        if let Some(secs) = settings.connect_timeout_secs {
            config = config.connect_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the maximum lifetime of a connection
    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Sets the idle timeout before closing a connection
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("postgres://localhost/jobly")
    }
}

/// Creates a database connection pool with the given configuration
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the pool cannot be created
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::{DatabaseConfig, create_pool};
///
/// let config = DatabaseConfig::new("postgres://localhost/jobly");
/// let pool = create_pool(config).await?;
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating database pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}
