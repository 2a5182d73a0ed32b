use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::{Unit, UNIT_COUNT};
use crate::enums::status::Status;

// ============================================================================
// Matrix
// ============================================================================

/// Task × unit status grid.
///
/// Always complete: one status per (task, unit) pair of the fixed lists.
/// Rows follow task order, columns follow unit order. Serialized as the bare
/// row list; deserializing checks the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Status>>", into = "Vec<Vec<Status>>")]
pub struct Matrix {
    rows: Vec<Vec<Status>>,
}

impl Matrix {
    /// Full grid with every cell set to `To do`
    pub fn new_default() -> Self {
        Self {
            rows: vec![vec![Status::default(); UNIT_COUNT]; Task::count()],
        }
    }

    /// Build from rows in task order; `None` if the shape is not task × unit
    pub fn from_rows(rows: Vec<Vec<Status>>) -> Option<Self> {
        if rows.len() != Task::count() || rows.iter().any(|r| r.len() != UNIT_COUNT) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn get(&self, task: Task, unit: Unit) -> Status {
        self.rows[task.index()][unit.index()]
    }

    /// Overwrite one cell, returning the previous status
    pub fn set(&mut self, task: Task, unit: Unit, status: Status) -> Status {
        std::mem::replace(&mut self.rows[task.index()][unit.index()], status)
    }

    pub fn row(&self, task: Task) -> &[Status] {
        &self.rows[task.index()]
    }

    pub fn rows(&self) -> &[Vec<Status>] {
        &self.rows
    }

    pub fn summary(&self) -> StatusSummary {
        let per_task = Task::all()
            .map(|task| TaskSummary {
                task,
                counts: count_statuses(self.row(task).iter().copied()),
            })
            .collect();
        StatusSummary {
            total: count_statuses(self.rows.iter().flatten().copied()),
            per_task,
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new_default()
    }
}

impl TryFrom<Vec<Vec<Status>>> for Matrix {
    type Error = String;

    fn try_from(rows: Vec<Vec<Status>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows).ok_or_else(|| {
            format!("expected {} rows of {} statuses", Task::count(), UNIT_COUNT)
        })
    }
}

impl From<Matrix> for Vec<Vec<Status>> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

fn count_statuses(statuses: impl Iterator<Item = Status>) -> Vec<(Status, usize)> {
    let mut counts: Vec<(Status, usize)> = Status::all().into_iter().map(|s| (s, 0)).collect();
    for status in statuses {
        if let Some(entry) = counts.iter_mut().find(|(s, _)| *s == status) {
            entry.1 += 1;
        }
    }
    counts
}

// ============================================================================
// DTOs
// ============================================================================

/// Body of `POST /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusRequest {
    pub task: Task,
    pub unit: Unit,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCellDto {
    pub task: Task,
    pub unit: Unit,
    pub status: Status,
    /// Status before the write, only set on mutation responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Status>,
    pub refresh: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub task: Task,
    pub counts: Vec<(Status, usize)>,
}

/// Cell counts per status, overall and per task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: Vec<(Status, usize)>,
    pub per_task: Vec<TaskSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_complete() {
        let matrix = Matrix::new_default();
        assert_eq!(matrix.rows().len(), 4);
        for task in Task::all() {
            for unit in Unit::all() {
                assert_eq!(matrix.get(task, unit), Status::ToDo);
            }
        }
    }

    #[test]
    fn test_from_rows_rejects_wrong_shape() {
        assert!(Matrix::from_rows(vec![vec![Status::ToDo; UNIT_COUNT]; 3]).is_none());
        assert!(Matrix::from_rows(vec![vec![Status::ToDo; UNIT_COUNT - 1]; 4]).is_none());
        assert!(Matrix::from_rows(vec![vec![Status::Ok; UNIT_COUNT]; 4]).is_some());
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let mut matrix = Matrix::new_default();
        matrix.set(Task::first(), Unit::from_index(3).unwrap(), Status::Ok);
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.starts_with("[[\"To do\""));
        assert_eq!(serde_json::from_str::<Matrix>(&json).unwrap(), matrix);

        let short = serde_json::to_string(&vec![vec![Status::Ok; 2]; 4]).unwrap();
        let err = serde_json::from_str::<Matrix>(&short).unwrap_err();
        assert!(err.to_string().contains("expected 4 rows of 108 statuses"));
        assert!(serde_json::from_str::<Matrix>(r#"{"rows": []}"#).is_err());
    }

    #[test]
    fn test_set_returns_previous() {
        let mut matrix = Matrix::new_default();
        let task = Task::first();
        let unit = Unit::from_index(5).unwrap();

        assert_eq!(matrix.set(task, unit, Status::Ok), Status::ToDo);
        assert_eq!(matrix.set(task, unit, Status::NonConforming), Status::Ok);
        assert_eq!(matrix.get(task, unit), Status::NonConforming);
        assert_eq!(matrix.get(task, Unit::first()), Status::ToDo);
    }

    #[test]
    fn test_summary_counts() {
        let mut matrix = Matrix::new_default();
        let task = Task::from_index(2).unwrap();
        matrix.set(task, Unit::first(), Status::Ok);
        matrix.set(task, Unit::from_index(1).unwrap(), Status::InProgress);

        let summary = matrix.summary();
        assert_eq!(summary.total[0], (Status::ToDo, 4 * UNIT_COUNT - 2));
        assert_eq!(summary.total[2], (Status::Ok, 1));
        assert_eq!(summary.per_task[2].counts[1], (Status::InProgress, 1));
        assert_eq!(summary.per_task[0].counts[0], (Status::ToDo, UNIT_COUNT));
    }
}
