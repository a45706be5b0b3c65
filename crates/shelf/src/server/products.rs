//! Catalog handlers.
//!
//! Public routes read; admin routes (behind [`AdminSession`]) create, delete and
//! report store health.

use super::auth::AdminSession;
use super::error::{AppError, AppResult};
use super::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shelfapp::model::{Catalog, Product, ProductDraft};

/// GET /api/products
pub async fn list_catalog(State(state): State<AppState>) -> AppResult<Json<Catalog>> {
    let catalog = state
        .with_api(|api| api.list_all())
        .await?
        .map_err(|e| AppError::from_store(e, "Failed to fetch products"))?;
    Ok(Json(catalog.catalog.unwrap_or_default()))
}

/// GET /api/products/{category}
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let result = state
        .with_api(move |api| api.list_category(&category))
        .await?
        .map_err(|e| AppError::from_store(e, "Failed to fetch products"))?;
    Ok(Json(result.listed_products))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let result = state
        .with_api(|api| api.categories())
        .await?
        .map_err(|e| AppError::from_store(e, "Failed to fetch categories"))?;
    Ok(Json(result.categories))
}

/// GET /api/admin/products
pub async fn admin_list(
    _session: AdminSession,
    state: State<AppState>,
) -> AppResult<Json<Catalog>> {
    list_catalog(state).await
}

/// POST /api/admin/products
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(draft) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let result = state
        .with_api(move |api| api.create_product(draft))
        .await?
        .map_err(|e| AppError::from_store(e, "Failed to add product"))?;
    let product = result
        .affected_products
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Internal("Failed to add product".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "product": product })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub category: Option<String>,
    pub id: Option<String>,
}

/// DELETE /api/admin/products?category=..&id=..
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<Json<Value>> {
    let missing = || AppError::Validation("Category and product ID are required".to_string());
    let category = params.category.filter(|c| !c.is_empty()).ok_or_else(missing)?;
    let id: u64 = params
        .id
        .as_deref()
        .ok_or_else(missing)?
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("Product ID must be a positive integer".to_string()))?;

    let result = state
        .with_api(move |api| api.delete_product(&category, id))
        .await?
        .map_err(|e| AppError::from_store(e, "Failed to delete product"))?;
    if result.affected_products.is_empty() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }
    Ok(Json(json!({ "success": true })))
}

/// GET /api/admin/health
pub async fn health(_session: AdminSession, State(state): State<AppState>) -> AppResult<Json<Value>> {
    let (result, diagnostics) = state
        .with_api(|api| (api.doctor(), api.diagnostics()))
        .await?;
    let result = result.map_err(|e| AppError::from_store(e, "Failed to check catalog"))?;
    Ok(Json(json!({
        "healthy": result.health.as_ref().is_some_and(|h| h.is_healthy()),
        "report": result.health,
        "diagnostics": diagnostics,
    })))
}
