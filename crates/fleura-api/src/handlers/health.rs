//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let database = state.db.health_check().await.unwrap_or(false);
    Ok(Json(serde_json::json!({
        "status": if database { "ok" } else { "degraded" },
        "database": database,
    })))
}
