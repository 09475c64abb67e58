//! Category admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use fleura_service::admin::category::CategoryRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let category = state.category_admin.create_category(req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": category }),
    ))
}

/// PUT /api/admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let category = state.category_admin.update_category(&id, req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": category }),
    ))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.category_admin.delete_category(&id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
