//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbConn, DbErr, EntityTrait, QueryOrder, Schema,
};
use uuid::Uuid;

use blog_core::domain::{Blog, BlogDraft, BlogId};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

use super::connections::DatabaseConfig;
use super::entity::blog::{self, Entity as BlogEntity};

/// PostgreSQL blog repository. Ids are v4 UUIDs generated on insert.
pub struct PostgresBlogRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Connect, then create the `blogs` table if it does not exist yet.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = config
            .connect()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        ensure_table(&db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Self::new(db))
    }

    fn key(id: &BlogId) -> Option<Uuid> {
        Uuid::parse_str(id.as_str()).ok()
    }
}

async fn ensure_table(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(BlogEntity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("Table `blogs` ready");
    Ok(())
}

fn query_error(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn parse_id(&self, raw: &str) -> Option<BlogId> {
        Uuid::parse_str(raw)
            .ok()
            .map(|id| BlogId::new(id.to_string()))
    }

    async fn create(&self, draft: BlogDraft) -> Result<Blog, RepoError> {
        let now = Utc::now();
        let (title, body, author) = draft.into_parts();

        let model = blog::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title),
            body: Set(body),
            author: Set(author),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(query_error)?;

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        let result = BlogEntity::find()
            .order_by_desc(blog::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, RepoError> {
        let Some(key) = Self::key(id) else {
            return Ok(None);
        };

        let result = BlogEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, id: &BlogId, draft: BlogDraft) -> Result<Blog, RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;
        let (title, body, author) = draft.into_parts();

        let active_model = blog::ActiveModel {
            id: Unchanged(key),
            title: Set(title),
            body: Set(body),
            author: Set(author),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepoError::NotFound),
            Err(e) => Err(query_error(e)),
        }
    }

    async fn delete(&self, id: &BlogId) -> Result<(), RepoError> {
        let key = Self::key(id).ok_or(RepoError::NotFound)?;

        let result = BlogEntity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
