use contracts::domain::a004_document::DocumentKey;
use contracts::domain::a005_selection::Selection;
use contracts::projections::p901_inspector::dto::{DocumentSlotDto, InspectorDto};

use crate::domain::a003_status_matrix::StatusMatrixStore;
use crate::domain::a004_document::DocumentRegistry;
use crate::system::auth::Access;

/// Details panel of the selected cell
pub fn build_inspector(
    store: &StatusMatrixStore,
    documents: &DocumentRegistry,
    selection: Selection,
    access: Access,
    refresh: u64,
) -> InspectorDto {
    let Selection { task, unit } = selection;
    let status = store.get_status(task, unit);

    let slots = documents
        .kinds_for_task(task)
        .into_iter()
        .map(|kind| DocumentSlotDto {
            kind,
            label: kind.display_name().to_string(),
            folder: kind.folder().map(str::to_string),
            document: documents.locate(&DocumentKey::new(task, unit, kind)),
        })
        .collect();

    InspectorDto {
        task_index: task.index(),
        unit_index: unit.index(),
        task,
        unit,
        status,
        status_color: status.color().to_string(),
        slots,
        can_edit: access.can_write(),
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_status_matrix::CsvMatrixFile;
    use contracts::domain::a001_task::Task;
    use contracts::domain::a002_unit::Unit;
    use contracts::enums::{DocumentKind, Status};
    use tempfile::TempDir;

    #[test]
    fn test_inspector_lists_expected_slots() {
        let tmp = TempDir::new().unwrap();
        let mut store =
            StatusMatrixStore::load(Box::new(CsvMatrixFile::new(tmp.path().join("s.csv"))))
                .unwrap();
        let documents = DocumentRegistry::open(tmp.path().join("docs")).unwrap();

        let selection = Selection {
            task: Task::first(),
            unit: Unit::from_index(4).unwrap(),
        };
        store
            .set_status(Access::Engineer, selection.task, selection.unit, Status::InProgress)
            .unwrap();
        documents
            .save(
                Access::Engineer,
                b"pv",
                "pv.pdf",
                &DocumentKey::new(selection.task, selection.unit, DocumentKind::PvArchitecture),
            )
            .unwrap();

        let view = build_inspector(&store, &documents, selection, Access::ReadOnly, 3);
        assert_eq!(view.status, Status::InProgress);
        assert_eq!(view.status_color, "#fff3cd");
        assert!(!view.can_edit);
        assert_eq!(view.refresh, 3);

        let kinds: Vec<DocumentKind> = view.slots.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DocumentKind::SelfCheckArchitecture,
                DocumentKind::PvArchitecture,
                DocumentKind::TopoScan,
            ]
        );
        assert!(view.slots[0].document.is_none());
        assert!(view.slots[1].document.is_some());
        assert_eq!(view.slots[2].folder.as_deref(), Some("Topography"));

        let editable = build_inspector(&store, &documents, selection, Access::Engineer, 3);
        assert!(editable.can_edit);
    }
}
