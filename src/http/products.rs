//! Product endpoints.
//!
//! Each handler validates first (identifier, then body) and only then
//! touches the repository, so a rejected request has no side effects.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::catalog::mapper::{validate_create, validate_update};
use crate::catalog::{CreateProductRequest, Product, ProductId, UpdateProductRequest};
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

pub async fn show_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::parse(&raw_id)?;
    let product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(raw_id))?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(request) = payload?;
    let new_product = validate_create(request)?;

    let product = state.products.insert(&new_product).await?;
    tracing::info!(id = %product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::parse(&raw_id)?;
    let Json(request) = payload?;
    let patch = validate_update(request)?;

    let product = state
        .products
        .update_by_id(id, &patch)
        .await
        .map_err(|e| ApiError::for_product(e, &raw_id))?;
    tracing::info!(id = %id, "Product updated");
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ProductId::parse(&raw_id)?;
    state
        .products
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::for_product(e, &raw_id))?;
    tracing::info!(id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
