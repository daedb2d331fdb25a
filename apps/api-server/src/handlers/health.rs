//! Health check endpoints.

use actix_web::{HttpResponse, web};
use blog_shared::MessageResponse;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
    pub timestamp: String,
}

/// GET /
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Blog CRUD API is running"))
}

/// Health check endpoint - reports version and store reachability.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let status = match state.blogs.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Store ping failed");
            "degraded"
        }
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store: state.blogs.backend(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
