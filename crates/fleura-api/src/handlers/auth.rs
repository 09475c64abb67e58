//! Auth boundary handlers.

use axum::Json;
use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state.auth.logout().await;
    Ok(Json(serde_json::json!({
        "success": result.success,
        "message": result.message,
    })))
}
