use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors of the status store, the document registry and the admin gate.
///
/// Lookups that find nothing are not errors: they return `None` or `false`.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Backing file exists but cannot be read as a task × unit grid
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Mutation attempted without the admin flag
    #[error("Access denied: engineer mode required")]
    Unauthorized,

    /// Upload payload or file name that cannot be stored
    #[error("Malformed upload: {0}")]
    Malformed(String),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TrackerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Unauthorized => StatusCode::FORBIDDEN,
            TrackerError::Malformed(_)
            | TrackerError::UnknownTask(_)
            | TrackerError::UnknownUnit(_)
            | TrackerError::UnknownDocumentKind(_) => StatusCode::BAD_REQUEST,
            TrackerError::StorageUnavailable(_) | TrackerError::Io(_) | TrackerError::Csv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TrackerError::Unauthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            TrackerError::Malformed("no comma".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TrackerError::StorageUnavailable("bad header".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
