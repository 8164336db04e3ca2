use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Service health
///
/// Reports that the API is up, along with the crate version and the current
/// server time. Lives outside the authenticated scope so load balancers can
/// probe it without a token.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "tasknest",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now()
    }))
}
