//! Blog resource handlers.
//!
//! Each handler validates its input, then makes exactly one repository call.
//! Ids are checked before anything else, so a malformed id never reaches the store.

use actix_web::{HttpResponse, web};

use blog_core::DomainError;
use blog_core::domain::{BlogDraft, BlogId};
use blog_shared::{BlogPayload, MessageResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn parse_id(state: &AppState, raw: &str) -> Result<BlogId, DomainError> {
    state.blogs.parse_id(raw).ok_or(DomainError::InvalidId)
}

fn draft(payload: BlogPayload) -> Result<BlogDraft, DomainError> {
    BlogDraft::new(payload.title, payload.body, payload.author)
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<BlogPayload>,
) -> AppResult<HttpResponse> {
    let draft = draft(body.into_inner())?;

    let blog = state.blogs.create(draft).await?;
    tracing::info!(blog_id = %blog.id, "Blog created");

    Ok(HttpResponse::Created().json(blog))
}

/// GET /blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&state, &path)?;

    let blog = state
        .blogs
        .find_by_id(&id)
        .await?
        .ok_or(DomainError::NotFound)?;

    Ok(HttpResponse::Ok().json(blog))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<BlogPayload>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&state, &path)?;
    let draft = draft(body.into_inner())?;

    let blog = state.blogs.update(&id, draft).await?;
    tracing::info!(blog_id = %blog.id, "Blog updated");

    Ok(HttpResponse::Ok().json(blog))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&state, &path)?;

    state.blogs.delete(&id).await?;
    tracing::info!(blog_id = %id, "Blog deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted")))
}
