//! Handlers for the `/products` resource.
//!
//! Each handler makes exactly one repository call. Failures bubble up as
//! [`AppError`] and are rendered by its `IntoResponse` impl.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::product::PRODUCT_ENTITY;
use catalog_core::types::{JsonMap, ProductId};
use catalog_db::models::product::Product;
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, ProductCreated, ProductUpdated};
use crate::state::AppState;

fn not_found(id: ProductId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PRODUCT_ENTITY,
        id: id.to_string(),
    })
}

/// POST /products
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<JsonMap>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductCreated>)> {
    let Json(fields) = payload?;
    let product = ProductRepo::create(state.store.as_ref(), fields).await?;

    tracing::info!(product_id = %product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product added successfully",
            product,
        }),
    ))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(state.store.as_ref()).await?;
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let id: ProductId = raw_id.parse()?;
    let product = ProductRepo::find_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// PUT /products/{id}
///
/// Partial update: only the fields in the body are validated and replaced.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<JsonMap>, JsonRejection>,
) -> AppResult<Json<ProductUpdated>> {
    let id: ProductId = raw_id.parse()?;
    let Json(fields) = payload?;

    let updated_product = ProductRepo::update(state.store.as_ref(), id, fields)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = %id, "Product updated");

    Ok(Json(ProductUpdated {
        message: "Product updated successfully",
        updated_product,
    }))
}

/// DELETE /products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id: ProductId = raw_id.parse()?;

    if !ProductRepo::delete(state.store.as_ref(), id).await? {
        return Err(not_found(id));
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}
