use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;
use crate::domain::a004_document::StoredDocument;
use crate::enums::document_kind::DocumentKind;
use crate::enums::status::Status;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderEntryDto {
    pub kind: DocumentKind,
    pub label: String,
    pub document: Option<StoredDocument>,
}

/// Sub-folder of a task folder; `name` is `None` for ungrouped kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubFolderDto {
    pub name: Option<String>,
    pub entries: Vec<FolderEntryDto>,
}

/// Folder-browser view of one (task, unit) pair, independent of the grid selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderViewDto {
    pub task: Task,
    pub unit: Unit,
    /// "<task> > <unit>"
    pub path: String,
    pub folders: Vec<SubFolderDto>,
    pub status: Status,
}
