//! Tag admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use fleura_service::admin::tag::TagRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/tags
pub async fn create_tag(
    State(state): State<AppState>,
    Json(req): Json<TagRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tag = state.tag_admin.create_tag(req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tag })))
}

/// PUT /api/admin/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TagRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tag = state.tag_admin.update_tag(&id, req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tag })))
}

/// DELETE /api/admin/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.tag_admin.delete_tag(&id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
