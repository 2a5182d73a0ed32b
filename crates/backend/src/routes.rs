use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::domain::a004_document::FILES_ROUTE;
use crate::state::AppState;
use crate::{handlers, system};

/// All application routes
pub fn configure_routes(state: AppState, max_upload_bytes: usize) -> Router {
    let require_admin =
        || middleware::from_fn_with_state(state.clone(), system::auth::middleware::require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        // ========================================
        // READ-ONLY ROUTES
        // ========================================
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route("/api/grid", get(handlers::p900_status_grid::get_grid))
        .route("/api/summary", get(handlers::a003_status_matrix::get_summary))
        .route("/api/inspector", get(handlers::p901_inspector::get_inspector))
        .route("/api/folders", get(handlers::p902_folder_view::get_folder))
        .route(
            "/api/documents/download",
            get(handlers::a004_document::download),
        )
        // Selection is presentation state, not protected
        .route("/api/selection", get(handlers::a005_selection::get_selection))
        .route(
            "/api/selection/cell",
            post(handlers::a005_selection::pick_cell),
        )
        .route(
            "/api/selection/task",
            post(handlers::a005_selection::select_task),
        )
        .route(
            "/api/selection/unit",
            post(handlers::a005_selection::select_unit),
        )
        // ========================================
        // MUTATING ROUTES (engineer only)
        // ========================================
        .route(
            "/api/status",
            get(handlers::a003_status_matrix::get_status).merge(
                post(handlers::a003_status_matrix::set_status).route_layer(require_admin()),
            ),
        )
        .route(
            "/api/status/reload",
            post(handlers::a003_status_matrix::reload).route_layer(require_admin()),
        )
        .route(
            "/api/documents",
            get(handlers::a004_document::list_existing).merge(
                post(handlers::a004_document::upload)
                    .delete(handlers::a004_document::delete)
                    .route_layer(require_admin()),
            ),
        )
        .route(
            "/api/documents/multipart",
            post(handlers::a004_document::upload_multipart).route_layer(require_admin()),
        )
        // Stored documents, for in-browser viewing
        .nest_service(FILES_ROUTE, ServeDir::new(state.documents.dir()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
