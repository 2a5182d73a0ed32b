use axum::extract::{Query, State};
use axum::Json;
use contracts::domain::common::TaskUnitQuery;
use contracts::projections::p902_folder_view::dto::FolderViewDto;

use super::parse_cell;
use crate::projections::p902_folder_view::service;
use crate::shared::error::TrackerError;
use crate::state::AppState;

/// GET /api/folders?task=..&unit=..
pub async fn get_folder(
    State(state): State<AppState>,
    Query(query): Query<TaskUnitQuery>,
) -> Result<Json<FolderViewDto>, TrackerError> {
    let (task, unit) = parse_cell(&query)?;

    Ok(Json(service::build_folder_view(
        &state.matrix(),
        &state.documents,
        task,
        unit,
    )))
}
