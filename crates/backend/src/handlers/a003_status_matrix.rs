use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::a003_status_matrix::{SetStatusRequest, StatusCellDto, StatusSummary};
use contracts::domain::common::TaskUnitQuery;
use contracts::projections::p900_status_grid::dto::GridDto;

use super::parse_cell;
use crate::projections::p900_status_grid::service::build_grid;
use crate::shared::error::TrackerError;
use crate::state::AppState;
use crate::system::auth::extractor::CurrentAccess;

/// GET /api/status?task=..&unit=..
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<TaskUnitQuery>,
) -> Result<Json<StatusCellDto>, TrackerError> {
    let (task, unit) = parse_cell(&query)?;
    let status = state.matrix().get_status(task, unit);

    Ok(Json(StatusCellDto {
        task,
        unit,
        status,
        previous: None,
        refresh: state.selection.refresh_count(),
    }))
}

/// POST /api/status
pub async fn set_status(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
    Json(request): Json<SetStatusRequest>,
) -> Result<Json<StatusCellDto>, TrackerError> {
    let previous = state.matrix_mut().set_status(
        access,
        request.task,
        request.unit,
        request.status,
    )?;
    let refresh = state.selection.bump_refresh();

    Ok(Json(StatusCellDto {
        task: request.task,
        unit: request.unit,
        status: request.status,
        previous: Some(previous),
        refresh,
    }))
}

/// GET /api/summary
pub async fn get_summary(State(state): State<AppState>) -> Json<StatusSummary> {
    Json(state.matrix().summary())
}

/// POST /api/status/reload
///
/// Re-reads the status file and returns the refreshed grid.
pub async fn reload(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
) -> Result<Json<GridDto>, TrackerError> {
    let mut store = state.matrix_mut();
    store.reload(access)?;
    let refresh = state.selection.bump_refresh();

    Ok(Json(build_grid(store.snapshot(), refresh)))
}
