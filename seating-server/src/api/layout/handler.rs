//! Floor Layout API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::models::{TableInfo, TableLayoutUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::validate_layout_update_count;

/// GET /api/admin/layout - current floor plan
pub async fn list(State(state): State<ServerState>) -> Json<Vec<TableInfo>> {
    Json(state.registry.current_tables())
}

/// PUT /api/admin/layout - move tables
///
/// Unknown ids are skipped; the response is the full floor plan.
pub async fn update(
    State(state): State<ServerState>,
    updates: Result<Json<Vec<TableLayoutUpdate>>, JsonRejection>,
) -> AppResult<Json<Vec<TableInfo>>> {
    let Json(updates) = updates.map_err(|e| AppError::validation(e.body_text()))?;
    validate_layout_update_count(updates.len())?;
    Ok(Json(state.registry.apply_layout_update(&updates)))
}
