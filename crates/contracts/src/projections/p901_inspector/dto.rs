use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;
use crate::domain::a004_document::StoredDocument;
use crate::enums::document_kind::DocumentKind;
use crate::enums::status::Status;

/// Expected document slot of the inspected cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSlotDto {
    pub kind: DocumentKind,
    pub label: String,
    pub folder: Option<String>,
    /// `None` when nothing has been uploaded for the slot yet
    pub document: Option<StoredDocument>,
}

/// Details panel for the selected (task, unit) cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorDto {
    pub task_index: usize,
    pub unit_index: usize,
    pub task: Task,
    pub unit: Unit,
    pub status: Status,
    pub status_color: String,
    pub slots: Vec<DocumentSlotDto>,
    /// Whether status and document controls are shown
    pub can_edit: bool,
    pub refresh: u64,
}
