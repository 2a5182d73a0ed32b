pub mod a003_status_matrix;
pub mod a004_document;
pub mod a005_selection;
pub mod catalog;
pub mod p900_status_grid;
pub mod p901_inspector;
pub mod p902_folder_view;

use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::common::TaskUnitQuery;
use contracts::enums::DocumentKind;

use crate::shared::error::TrackerError;

/// Task from a query-string label
pub(crate) fn parse_task(label: &str) -> Result<Task, TrackerError> {
    Task::from_label(label).ok_or_else(|| TrackerError::UnknownTask(label.to_string()))
}

/// Unit from a query-string label
pub(crate) fn parse_unit(label: &str) -> Result<Unit, TrackerError> {
    Unit::from_label(label).ok_or_else(|| TrackerError::UnknownUnit(label.to_string()))
}

/// Cell addressed by a `?task=..&unit=..` query
pub(crate) fn parse_cell(query: &TaskUnitQuery) -> Result<(Task, Unit), TrackerError> {
    Ok((parse_task(&query.task)?, parse_unit(&query.unit)?))
}

/// Document kind from its code
pub(crate) fn parse_kind(code: &str) -> Result<DocumentKind, TrackerError> {
    DocumentKind::from_code(code).ok_or_else(|| TrackerError::UnknownDocumentKind(code.to_string()))
}
