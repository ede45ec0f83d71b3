//! Common routes: service info and liveness.

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Account REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

#[derive(Serialize)]
struct InfoBody {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn index() -> Json<InfoBody> {
    Json(InfoBody {
        name: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// Common routes (no state): GET /, GET /health.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
