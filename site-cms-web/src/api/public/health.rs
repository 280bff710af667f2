//! Liveness and readiness probes for load balancers.

use crate::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::warn;

/// Configure health check routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/health/ready", web::get().to(ready));
}

/// Process is up.
async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Process is up and the database answers.
async fn ready(state: web::Data<AppState>) -> HttpResponse {
    match state.db.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ready", "database": "ok" })),
        Err(e) => {
            warn!(error = %e, "Readiness probe failed");
            HttpResponse::ServiceUnavailable()
                .json(json!({ "status": "unavailable", "database": e.to_string() }))
        }
    }
}
