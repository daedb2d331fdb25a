//! Blog storage backends and their connection settings.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::{DatabaseConfig, MongoConfig, StoreConfig};
pub use memory::InMemoryBlogRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogRepository;

#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoBlogRepository;
