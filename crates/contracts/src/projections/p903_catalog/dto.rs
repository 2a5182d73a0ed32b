use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;
use crate::enums::document_kind::DocumentKind;
use crate::enums::status::Status;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalogEntry {
    pub index: usize,
    pub task: Task,
    pub kinds: Vec<DocumentKind>,
}

/// Fixed lists a client needs to build selectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDto {
    pub tasks: Vec<TaskCatalogEntry>,
    pub units: Vec<Unit>,
    pub statuses: Vec<Status>,
}

impl CatalogDto {
    pub fn build() -> Self {
        Self {
            tasks: Task::all()
                .map(|task| TaskCatalogEntry {
                    index: task.index(),
                    task,
                    kinds: DocumentKind::for_task(task),
                })
                .collect(),
            units: Unit::all().collect(),
            statuses: Status::all(),
        }
    }
}
