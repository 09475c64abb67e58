//! Storefront catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/flowers
pub async fn list_flowers(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let flowers = state.catalog_service.list_visible_flowers().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": flowers }),
    ))
}

/// GET /api/flowers/{id}
pub async fn get_flower(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let flower = state.catalog_service.get_flower(&id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": flower })))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let categories = state.catalog_service.list_categories().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": categories }),
    ))
}

/// GET /api/tags
pub async fn list_tags(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tags = state.catalog_service.list_tags().await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tags })))
}

/// GET /api/bouquets/featured
pub async fn featured_bouquets(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bouquets = state.catalog_service.get_featured_bouquets().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": bouquets }),
    ))
}

/// GET /api/bouquets/{id}
pub async fn get_bouquet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bouquet = state.catalog_service.get_bouquet_with_flowers(&id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": bouquet }),
    ))
}
