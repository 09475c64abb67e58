//! Bouquet admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use fleura_service::admin::bouquet::BouquetRequest;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/bouquets
pub async fn list_bouquets(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bouquets = state.bouquet_admin.list_bouquets().await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": bouquets }),
    ))
}

/// POST /api/admin/bouquets
pub async fn create_bouquet(
    State(state): State<AppState>,
    Json(req): Json<BouquetRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bouquet = state.bouquet_admin.create_bouquet(req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": bouquet }),
    ))
}

/// PUT /api/admin/bouquets/{id}
pub async fn update_bouquet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<BouquetRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let bouquet = state.bouquet_admin.update_bouquet(&id, req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": bouquet }),
    ))
}

/// DELETE /api/admin/bouquets/{id}
pub async fn delete_bouquet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.bouquet_admin.delete_bouquet(&id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
