use axum::extract::State;
use axum::Json;
use contracts::projections::p901_inspector::dto::InspectorDto;

use crate::projections::p901_inspector::service;
use crate::state::AppState;
use crate::system::auth::extractor::CurrentAccess;

/// GET /api/inspector
pub async fn get_inspector(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
) -> Json<InspectorDto> {
    let view = service::build_inspector(
        &state.matrix(),
        &state.documents,
        state.selection.current(),
        access,
        state.selection.refresh_count(),
    );
    Json(view)
}
