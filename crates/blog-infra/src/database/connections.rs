#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Which store backs the API, chosen once at startup.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// Process-local map; data is lost on restart.
    InMemory,
    Postgres(DatabaseConfig),
    Mongo(MongoConfig),
}

impl StoreConfig {
    /// Backend name as reported by the health endpoint.
    pub fn backend(&self) -> &'static str {
        match self {
            StoreConfig::InMemory => "memory",
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Mongo(_) => "mongodb",
        }
    }
}

/// Configuration for the PostgreSQL database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Configuration for the MongoDB document store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    /// Used when the connection string names no default database.
    pub database: String,
}

#[cfg(feature = "postgres")]
impl DatabaseConfig {
    /// Open the connection pool.
    pub async fn connect(&self) -> Result<DbConn, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&self.url)
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", self.max_connections);

        Ok(conn)
    }
}
