pub mod health;
pub mod product;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /                  welcome text
/// /health            service and store health
/// /products          list, create
/// /products/{id}     get, update, delete
/// ```
///
/// Unknown paths answer 404 with a JSON `message`; known paths with an
/// unsupported method answer 405 with a JSON `error`.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .merge(health::router())
        .merge(product::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// GET /
async fn welcome() -> &'static str {
    "Welcome to Product Management API"
}

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "message": "Route not found",
            "code": "NOT_FOUND",
        })),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "error": "Method not allowed",
            "code": "METHOD_NOT_ALLOWED",
        })),
    )
}
