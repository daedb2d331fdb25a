//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::{DatabaseConfig, MongoConfig, StoreConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `MONGO_URI` wins over `DATABASE_URL`; with neither set the store is in-memory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store = if let Some(uri) = lookup("MONGO_URI") {
            StoreConfig::Mongo(MongoConfig {
                uri,
                database: lookup("MONGO_DATABASE").unwrap_or_else(|| "blog".to_string()),
            })
        } else if let Some(url) = lookup("DATABASE_URL") {
            StoreConfig::Postgres(DatabaseConfig {
                url,
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
            })
        } else {
            StoreConfig::InMemory
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store,
        }
    }
}
