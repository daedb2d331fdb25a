//! MongoDB repository implementation.
//!
//! Blogs live in the `blogs` collection with camelCase field names and a
//! native `ObjectId` as `_id`. Timestamps are BSON datetimes, so they carry
//! millisecond precision.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime as BsonDateTime, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Blog, BlogDraft, BlogId};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

use super::connections::MongoConfig;

const COLLECTION: &str = "blogs";

/// Stored shape of a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<BlogDocument> for Blog {
    fn from(document: BlogDocument) -> Self {
        Self {
            id: BlogId::new(document.id.to_hex()),
            title: document.title,
            body: document.body,
            author: document.author,
            created_at: to_utc(document.created_at),
            updated_at: to_utc(document.updated_at),
        }
    }
}

fn to_utc(dt: BsonDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// ObjectId predicate: exactly 24 hex digits.
fn parse_object_id(raw: &str) -> Option<BlogId> {
    ObjectId::parse_str(raw)
        .ok()
        .map(|oid| BlogId::new(oid.to_hex()))
}

/// `$set`/`$unset` document replacing all mutable fields.
fn replacement(draft: BlogDraft, now: BsonDateTime) -> Document {
    let (title, body, author) = draft.into_parts();
    match author {
        Some(author) => doc! {
            "$set": { "title": title, "body": body, "author": author, "updatedAt": now },
        },
        None => doc! {
            "$set": { "title": title, "body": body, "updatedAt": now },
            "$unset": { "author": "" },
        },
    }
}

fn query_error(e: mongodb::error::Error) -> RepoError {
    RepoError::Query(e.to_string())
}

/// MongoDB blog repository.
pub struct MongoBlogRepository {
    database: Database,
    blogs: Collection<BlogDocument>,
}

impl MongoBlogRepository {
    pub fn new(database: Database) -> Self {
        let blogs = database.collection(COLLECTION);
        Self { database, blogs }
    }

    /// Build a client and verify the server answers before serving traffic.
    pub async fn connect(config: &MongoConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to MongoDB...");

        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&config.database));

        let repo = Self::new(database);
        repo.ping().await?;
        tracing::info!(database = %repo.database.name(), "MongoDB connected");

        Ok(repo)
    }

    fn key(id: &BlogId) -> Option<ObjectId> {
        ObjectId::parse_str(id.as_str()).ok()
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    fn parse_id(&self, raw: &str) -> Option<BlogId> {
        parse_object_id(raw)
    }

    async fn create(&self, draft: BlogDraft) -> Result<Blog, RepoError> {
        let now = BsonDateTime::now();
        let (title, body, author) = draft.into_parts();
        let document = BlogDocument {
            id: ObjectId::new(),
            title,
            body,
            author,
            created_at: now,
            updated_at: now,
        };

        self.blogs.insert_one(&document).await.map_err(query_error)?;

        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        // ObjectIds grow monotonically, so `_id` orders blogs created in the same millisecond.
        let cursor = self
            .blogs
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await
            .map_err(query_error)?;

        let documents: Vec<BlogDocument> = cursor.try_collect().await.map_err(query_error)?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, RepoError> {
        let Some(key) = Self::key(id) else {
            return Ok(None);
        };

        let document = self
            .blogs
            .find_one(doc! { "_id": key })
            .await
            .map_err(query_error)?;

        Ok(document.map(Into::into))
    }

    async fn update(&self, id: &BlogId, draft: BlogDraft) -> Result<Blog, RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;

        self.blogs
            .find_one_and_update(doc! { "_id": key }, replacement(draft, BsonDateTime::now()))
            .return_document(ReturnDocument::After)
            .await
            .map_err(query_error)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: &BlogId) -> Result<(), RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;

        let result = self
            .blogs
            .delete_one(doc! { "_id": key })
            .await
            .map_err(query_error)?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
