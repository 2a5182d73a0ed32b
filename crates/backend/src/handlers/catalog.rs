use axum::Json;
use contracts::projections::p903_catalog::dto::CatalogDto;

/// GET /api/catalog
pub async fn get_catalog() -> Json<CatalogDto> {
    Json(CatalogDto::build())
}
