use axum::{
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a004_document::{
    DocumentKey, DocumentKeyQuery, DocumentListDto, StoredDocument, UploadRequest,
};
use contracts::domain::common::TaskUnitQuery;
use serde::Serialize;

use super::{parse_cell, parse_kind, parse_task, parse_unit};
use crate::shared::error::TrackerError;
use crate::state::AppState;
use crate::system::auth::extractor::CurrentAccess;

#[derive(Serialize)]
pub struct UploadResponse {
    pub document: StoredDocument,
    pub refresh: u64,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub refresh: u64,
}

fn parse_key(query: &DocumentKeyQuery) -> Result<DocumentKey, TrackerError> {
    Ok(DocumentKey::new(
        parse_task(&query.task)?,
        parse_unit(&query.unit)?,
        parse_kind(&query.kind)?,
    ))
}

/// GET /api/documents?task=..&unit=..
pub async fn list_existing(
    State(state): State<AppState>,
    Query(query): Query<TaskUnitQuery>,
) -> Result<Json<DocumentListDto>, TrackerError> {
    let (task, unit) = parse_cell(&query)?;

    Ok(Json(DocumentListDto {
        task,
        unit,
        documents: state.documents.list_existing(task, unit),
    }))
}

/// POST /api/documents
///
/// Body carries the file as a `data:` URL.
pub async fn upload(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
    Json(request): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, TrackerError> {
    let key = DocumentKey::new(request.task, request.unit, request.kind);
    let document = state.documents.save_data_url(
        access,
        &request.contents,
        &request.filename,
        &key,
    )?;

    Ok(Json(UploadResponse {
        document,
        refresh: state.selection.bump_refresh(),
    }))
}

/// POST /api/documents/multipart
///
/// Text fields `task`, `unit`, `kind` plus a `file` field with a file name.
pub async fn upload_multipart(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, TrackerError> {
    let mut task = None;
    let mut unit = None;
    let mut kind = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| TrackerError::Malformed(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "task" => task = Some(parse_task(&field_text(field).await?)?),
            "unit" => unit = Some(parse_unit(&field_text(field).await?)?),
            "kind" => kind = Some(parse_kind(&field_text(field).await?)?),
            "file" => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| TrackerError::Malformed("file field has no file name".into()))?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| TrackerError::Malformed(e.to_string()))?;
                file = Some((filename, bytes.to_vec()));
            }
            other => tracing::debug!("Ignoring multipart field '{}'", other),
        }
    }

    let missing = |field: &str| TrackerError::Malformed(format!("missing '{}' field", field));
    let key = DocumentKey::new(
        task.ok_or_else(|| missing("task"))?,
        unit.ok_or_else(|| missing("unit"))?,
        kind.ok_or_else(|| missing("kind"))?,
    );
    let (filename, bytes) = file.ok_or_else(|| missing("file"))?;

    let document = state.documents.save(access, &bytes, &filename, &key)?;

    Ok(Json(UploadResponse {
        document,
        refresh: state.selection.bump_refresh(),
    }))
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, TrackerError> {
    field
        .text()
        .await
        .map_err(|e| TrackerError::Malformed(e.to_string()))
}

/// DELETE /api/documents?task=..&unit=..&kind=..
pub async fn delete(
    State(state): State<AppState>,
    CurrentAccess(access): CurrentAccess,
    Query(query): Query<DocumentKeyQuery>,
) -> Result<Json<DeleteResponse>, TrackerError> {
    let key = parse_key(&query)?;
    let deleted = state.documents.delete(access, &key)?;

    // Nothing removed means nothing to re-render
    let refresh = if deleted {
        state.selection.bump_refresh()
    } else {
        state.selection.refresh_count()
    };

    Ok(Json(DeleteResponse { deleted, refresh }))
}

/// GET /api/documents/download?task=..&unit=..&kind=..
///
/// Same bytes as `/files/<name>`, sent as an attachment named after the stored file.
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DocumentKeyQuery>,
) -> Result<Response, TrackerError> {
    let key = parse_key(&query)?;
    let Some(document) = state.documents.locate(&key) else {
        return Ok((StatusCode::NOT_FOUND, "No document for this slot").into_response());
    };

    let bytes = tokio::fs::read(state.documents.path_of(&document)).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        document.file_name,
        urlencoding::encode(&document.file_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, document.media_type.clone()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
