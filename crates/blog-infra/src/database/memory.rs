//! In-memory blog store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Blog, BlogDraft, BlogId};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

struct Entry {
    /// Insertion order, breaks ties between equal `created_at` values.
    seq: u64,
    blog: Blog,
}

#[derive(Default)]
struct Blogs {
    entries: HashMap<Uuid, Entry>,
    next_seq: u64,
}

/// In-memory blog repository using a HashMap behind an async RwLock.
///
/// Ids are v4 UUIDs. Note: data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Blogs>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Blogs::default()),
        }
    }

    fn key(id: &BlogId) -> Option<Uuid> {
        Uuid::parse_str(id.as_str()).ok()
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn parse_id(&self, raw: &str) -> Option<BlogId> {
        Uuid::parse_str(raw)
            .ok()
            .map(|id| BlogId::new(id.to_string()))
    }

    async fn create(&self, draft: BlogDraft) -> Result<Blog, RepoError> {
        let id = Uuid::new_v4();
        let blog = Blog::from_draft(BlogId::new(id.to_string()), draft, Utc::now());

        let mut store = self.store.write().await;
        let seq = store.next_seq;
        store.next_seq += 1;
        store.entries.insert(
            id,
            Entry {
                seq,
                blog: blog.clone(),
            },
        );

        Ok(blog)
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;

        let mut entries: Vec<&Entry> = store.entries.values().collect();
        entries.sort_by(|a, b| {
            b.blog
                .created_at
                .cmp(&a.blog.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(entries.into_iter().map(|e| e.blog.clone()).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, RepoError> {
        let Some(key) = Self::key(id) else {
            return Ok(None);
        };

        let store = self.store.read().await;
        Ok(store.entries.get(&key).map(|e| e.blog.clone()))
    }

    async fn update(&self, id: &BlogId, draft: BlogDraft) -> Result<Blog, RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;

        let mut store = self.store.write().await;
        let entry = store.entries.get_mut(&key).ok_or(RepoError::NotFound)?;
        entry.blog.apply(draft, Utc::now());

        Ok(entry.blog.clone())
    }

    async fn delete(&self, id: &BlogId) -> Result<(), RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;

        let mut store = self.store.write().await;
        store
            .entries
            .remove(&key)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
