use axum::extract::State;
use axum::Json;
use contracts::projections::p900_status_grid::dto::GridDto;

use crate::projections::p900_status_grid::service;
use crate::state::AppState;

/// GET /api/grid
pub async fn get_grid(State(state): State<AppState>) -> Json<GridDto> {
    let refresh = state.selection.refresh_count();
    Json(service::build_grid(state.matrix().snapshot(), refresh))
}
