use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;
use crate::enums::document_kind::DocumentKind;

/// Extensions probed when locating a document, in probe order
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

// ============================================================================
// Key
// ============================================================================

/// Structured identity of a document slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    pub task: Task,
    pub unit: Unit,
    pub kind: DocumentKind,
}

impl DocumentKey {
    pub fn new(task: Task, unit: Unit, kind: DocumentKind) -> Self {
        Self { task, unit, kind }
    }

    /// Whether the task of this key expects the kind at all
    pub fn is_expected(&self) -> bool {
        DocumentKind::for_task(self.task).contains(&self.kind)
    }
}

/// Query string form of a key (`?task=..&unit=..&kind=..`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentKeyQuery {
    pub task: String,
    pub unit: String,
    pub kind: String,
}

// ============================================================================
// Stored document
// ============================================================================

/// A document present in the storage directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub key: DocumentKey,
    /// File name relative to the documents directory
    pub file_name: String,
    pub extension: String,
    pub media_type: String,
    pub size: u64,
    /// Path under which the file is served for in-browser viewing
    pub url: String,
}

/// Body of `POST /api/documents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRequest {
    pub task: Task,
    pub unit: Unit,
    pub kind: DocumentKind,
    /// Name of the file on the uploader's machine, only its extension is kept
    pub filename: String,
    /// `data:<media-type>;base64,<body>`
    pub contents: String,
}

/// Documents of one (task, unit) pair, keyed by kind in task order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListDto {
    pub task: Task,
    pub unit: Unit,
    pub documents: Vec<(DocumentKind, StoredDocument)>,
}
