use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a005_selection::{PickCellRequest, SelectIndexRequest, SelectionView};

use crate::state::AppState;

/// GET /api/selection
pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionView> {
    Json(state.selection.view())
}

/// POST /api/selection/cell
pub async fn pick_cell(
    State(state): State<AppState>,
    Json(request): Json<PickCellRequest>,
) -> Result<Json<SelectionView>, StatusCode> {
    match state.selection.pick_cell(request.row, &request.column_id) {
        Ok(_) => Ok(Json(state.selection.view())),
        Err(e) => {
            tracing::warn!("Rejected grid pick: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/selection/task
pub async fn select_task(
    State(state): State<AppState>,
    Json(request): Json<SelectIndexRequest>,
) -> Result<Json<SelectionView>, StatusCode> {
    match state.selection.select_task(request.index) {
        Ok(()) => Ok(Json(state.selection.view())),
        Err(e) => {
            tracing::warn!("Rejected task selection: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /api/selection/unit
pub async fn select_unit(
    State(state): State<AppState>,
    Json(request): Json<SelectIndexRequest>,
) -> Result<Json<SelectionView>, StatusCode> {
    match state.selection.select_unit(request.index) {
        Ok(()) => Ok(Json(state.selection.view())),
        Err(e) => {
            tracing::warn!("Rejected unit selection: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
