//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::{HttpResponse, web};
use blog_shared::ErrorResponse;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Liveness
        .route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        // Blog resource
        .service(
            web::scope("/blogs")
                .route("", web::post().to(blogs::create_blog))
                .route("", web::get().to(blogs::list_blogs))
                .route("/{id}", web::get().to(blogs::get_blog))
                .route("/{id}", web::put().to(blogs::update_blog))
                .route("/{id}", web::delete().to(blogs::delete_blog)),
        )
        .default_service(web::to(not_found));
}

/// Fallback for unmatched routes.
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Not found"))
}
