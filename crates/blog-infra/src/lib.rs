//! # Blog Infrastructure
//!
//! Concrete implementations of the [`BlogRepository`](blog_core::ports::BlogRepository)
//! port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL support via SeaORM
//! - `mongodb` - MongoDB document store support

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryBlogRepository;
pub use database::{DatabaseConfig, MongoConfig, StoreConfig};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;

#[cfg(feature = "mongodb")]
pub use database::MongoBlogRepository;
