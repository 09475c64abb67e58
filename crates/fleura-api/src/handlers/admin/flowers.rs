//! Flower admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use fleura_service::admin::flower::FlowerRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/flowers
pub async fn list_flowers(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let flowers = state.flower_admin.list_flowers().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": flowers }),
    ))
}

/// POST /api/admin/flowers
pub async fn create_flower(
    State(state): State<AppState>,
    Json(req): Json<FlowerRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let flower = state.flower_admin.create_flower(req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": flower })))
}

/// PUT /api/admin/flowers/{id}
pub async fn update_flower(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<FlowerRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let flower = state.flower_admin.update_flower(&id, req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": flower })))
}

/// DELETE /api/admin/flowers/{id}
pub async fn delete_flower(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.flower_admin.delete_flower(&id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
