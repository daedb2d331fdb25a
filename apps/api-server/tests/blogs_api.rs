//! End-to-end tests for the blog HTTP API.
//!
//! Each test builds the actix application around a fresh in-memory store and
//! drives it through `actix_web::test` without opening a socket.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::middleware::NormalizePath;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use api_server::handlers::configure_routes;
use api_server::observability::{REQUEST_ID_HEADER, RequestIdMiddleware};
use api_server::state::AppState;
use blog_core::domain::{Blog, BlogDraft, BlogId};
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

macro_rules! init_app {
    () => {
        init_app!(AppState::in_memory())
    };
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .wrap(NormalizePath::trim())
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

/// Sends a request and returns (status, json body).
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

const MISSING_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

#[actix_web::test]
async fn test_root_reports_liveness() {
    let app = init_app!();
    let (status, body) = send!(app, test::TestRequest::get().uri("/"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Blog CRUD API is running" }));
}

#[actix_web::test]
async fn test_health_reports_store() {
    let app = init_app!();
    let (status, body) = send!(app, test::TestRequest::get().uri("/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}

#[actix_web::test]
async fn test_create_blog() {
    let app = init_app!();
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": "Hi", "body": "World" }))
    );

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["title"], "Hi");
    assert_eq!(body["body"], "World");
    assert!(body.get("author").is_none());
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[actix_web::test]
async fn test_create_with_missing_fields_persists_nothing() {
    let app = init_app!();

    for payload in [
        json!({ "body": "World" }),
        json!({ "title": "Hi" }),
        json!({ "title": "", "body": "World" }),
        json!({ "title": "Hi", "body": null }),
        json!({}),
    ] {
        let (status, body) = send!(
            app,
            test::TestRequest::post().uri("/blogs").set_json(&payload)
        );
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body, json!({ "message": "Title and body are required" }));
    }

    let (_, list) = send!(app, test::TestRequest::get().uri("/blogs"));
    assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn test_create_with_unreadable_body_is_bad_request() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .insert_header(ContentType::json())
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": 1, "body": "World" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_newest_first() {
    let app = init_app!();

    for title in ["one", "two", "three"] {
        let (status, _) = send!(
            app,
            test::TestRequest::post()
                .uri("/blogs")
                .set_json(json!({ "title": title, "body": "text" }))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send!(app, test::TestRequest::get().uri("/blogs"));
    assert_eq!(status, StatusCode::OK);

    let blogs: Vec<Blog> = serde_json::from_value(body).unwrap();
    assert_eq!(blogs.len(), 3);
    assert!(blogs.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let titles: Vec<&str> = blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["three", "two", "one"]);
}

#[actix_web::test]
async fn test_get_blog() {
    let app = init_app!();
    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": "Hi", "body": "World", "author": "ada" }))
    );
    let id = created["id"].as_str().unwrap();

    let (status, body) = send!(app, test::TestRequest::get().uri(&format!("/blogs/{id}")));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[actix_web::test]
async fn test_get_missing_and_malformed_ids() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/blogs/{MISSING_ID}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Blog not found" }));

    let (status, body) = send!(app, test::TestRequest::get().uri("/blogs/not-an-id"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid ID" }));
}

#[actix_web::test]
async fn test_update_blog() {
    let app = init_app!();
    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": "Hi", "body": "World", "author": "ada" }))
    );
    let id = created["id"].as_str().unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;

    let (status, updated) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/blogs/{id}"))
            .set_json(json!({ "title": "Hello", "body": "Again" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "Hello");
    assert_eq!(updated["body"], "Again");
    assert!(updated.get("author").is_none());

    let before: Blog = serde_json::from_value(created).unwrap();
    let after: Blog = serde_json::from_value(updated).unwrap();
    assert!(after.updated_at > before.updated_at);
}

#[actix_web::test]
async fn test_update_validation_order() {
    let app = init_app!();

    // Malformed id wins over missing fields
    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri("/blogs/not-an-id")
            .set_json(json!({ "title": "" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid ID");

    // Missing fields are reported before existence is checked
    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/blogs/{MISSING_ID}"))
            .set_json(json!({ "title": "Hi" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title and body are required");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/blogs/{MISSING_ID}"))
            .set_json(json!({ "title": "Hi", "body": "World" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Blog not found");
}

#[actix_web::test]
async fn test_delete_then_get_is_not_found() {
    let app = init_app!();
    let (_, created) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": "Hi", "body": "World" }))
    );
    let uri = format!("/blogs/{}", created["id"].as_str().unwrap());

    let (status, body) = send!(app, test::TestRequest::delete().uri(&uri));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Blog deleted" }));

    let (status, _) = send!(app, test::TestRequest::get().uri(&uri));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(app, test::TestRequest::delete().uri(&uri));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send!(app, test::TestRequest::delete().uri("/blogs/42"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid ID");
}

#[actix_web::test]
async fn test_trailing_slash_and_unknown_route() {
    let app = init_app!();

    let (status, body) = send!(app, test::TestRequest::get().uri("/blogs/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send!(app, test::TestRequest::get().uri("/posts"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not found" }));
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((REQUEST_ID_HEADER, "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "abc-123");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
}

/// Store whose every call fails, as if the database were unreachable.
struct UnreachableStore;

#[async_trait]
impl BlogRepository for UnreachableStore {
    fn backend(&self) -> &'static str {
        "unreachable"
    }

    fn parse_id(&self, raw: &str) -> Option<BlogId> {
        Some(BlogId::new(raw))
    }

    async fn create(&self, _draft: BlogDraft) -> Result<Blog, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn find_all(&self) -> Result<Vec<Blog>, RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }

    async fn find_by_id(&self, _id: &BlogId) -> Result<Option<Blog>, RepoError> {
        Err(RepoError::Query("timeout".into()))
    }

    async fn update(&self, _id: &BlogId, _draft: BlogDraft) -> Result<Blog, RepoError> {
        Err(RepoError::Query("timeout".into()))
    }

    async fn delete(&self, _id: &BlogId) -> Result<(), RepoError> {
        Err(RepoError::Query("timeout".into()))
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Err(RepoError::Connection("connection refused".into()))
    }
}

#[actix_web::test]
async fn test_store_failures_are_generic_server_errors() {
    let app = init_app!(AppState::with_repository(Arc::new(UnreachableStore)));
    let server_error = json!({ "message": "Server error" });

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/blogs")
            .set_json(json!({ "title": "Hi", "body": "World" }))
    );
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, server_error);

    let (status, body) = send!(app, test::TestRequest::get().uri("/blogs"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, server_error);

    let (status, body) = send!(app, test::TestRequest::delete().uri("/blogs/x"));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, server_error);

    let (status, body) = send!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
}
