use async_trait::async_trait;

use crate::domain::{Blog, BlogDraft, BlogId};
use crate::error::RepoError;

/// Blog repository - the document store behind the API.
///
/// Every operation maps to a single store call. Implementations assign ids
/// and maintain `created_at`/`updated_at`.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// The store's identifier-validity predicate.
    ///
    /// Returns `None` when `raw` cannot name any document in this store, so
    /// callers can reject it without a round trip.
    fn parse_id(&self, raw: &str) -> Option<BlogId>;

    /// Persist a new blog and return it with its id and timestamps.
    async fn create(&self, draft: BlogDraft) -> Result<Blog, RepoError>;

    /// All blogs, newest `created_at` first.
    async fn find_all(&self) -> Result<Vec<Blog>, RepoError>;

    /// Find a blog by its id.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, RepoError>;

    /// Replace title, body and author; returns the updated blog.
    ///
    /// Fails with [`RepoError::NotFound`] if no blog has this id.
    async fn update(&self, id: &BlogId, draft: BlogDraft) -> Result<Blog, RepoError>;

    /// Delete a blog by its id.
    ///
    /// Fails with [`RepoError::NotFound`] if no blog has this id.
    async fn delete(&self, id: &BlogId) -> Result<(), RepoError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;
}
