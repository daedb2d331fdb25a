//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;
use blog_infra::database::{InMemoryBlogRepository, StoreConfig};

#[cfg(feature = "mongodb")]
use blog_infra::database::MongoBlogRepository;
#[cfg(feature = "postgres")]
use blog_infra::database::PostgresBlogRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
}

impl AppState {
    /// Build the application state for the configured store.
    ///
    /// A configured store that cannot be reached is an error; only an
    /// unconfigured store falls back to memory.
    pub async fn new(store: &StoreConfig) -> Result<Self, RepoError> {
        let blogs: Arc<dyn BlogRepository> = match store {
            StoreConfig::InMemory => {
                tracing::warn!(
                    "Neither MONGO_URI nor DATABASE_URL set. Running with in-memory store."
                );
                Arc::new(InMemoryBlogRepository::new())
            }
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(config) => Arc::new(PostgresBlogRepository::connect(config).await?),
            #[cfg(feature = "mongodb")]
            StoreConfig::Mongo(config) => Arc::new(MongoBlogRepository::connect(config).await?),
            #[allow(unreachable_patterns)]
            other => {
                return Err(RepoError::Connection(format!(
                    "server built without {} support",
                    other.backend()
                )));
            }
        };

        tracing::info!(store = blogs.backend(), "Application state initialized");

        Ok(Self::with_repository(blogs))
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogRepository::new()))
    }

    pub fn with_repository(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }
}
