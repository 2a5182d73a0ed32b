use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::a004_document::DocumentKey;
use contracts::projections::p902_folder_view::dto::{FolderEntryDto, FolderViewDto, SubFolderDto};

use crate::domain::a003_status_matrix::StatusMatrixStore;
use crate::domain::a004_document::DocumentRegistry;

/// Folder-browser view of one (task, unit) pair.
///
/// Kinds sharing a sub-folder are grouped, keeping the task's kind order.
pub fn build_folder_view(
    store: &StatusMatrixStore,
    documents: &DocumentRegistry,
    task: Task,
    unit: Unit,
) -> FolderViewDto {
    let mut folders: Vec<SubFolderDto> = Vec::new();

    for kind in documents.kinds_for_task(task) {
        let entry = FolderEntryDto {
            kind,
            label: kind.display_name().to_string(),
            document: documents.locate(&DocumentKey::new(task, unit, kind)),
        };
        let name = kind.folder().map(str::to_string);

        match folders.iter_mut().find(|f| f.name == name) {
            Some(folder) => folder.entries.push(entry),
            None => folders.push(SubFolderDto {
                name,
                entries: vec![entry],
            }),
        }
    }

    FolderViewDto {
        task,
        unit,
        path: format!("{} > {}", task, unit),
        folders,
        status: store.get_status(task, unit),
    }
}
