use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;

/// Column id of the task-label column of the grid; never a unit
pub const TASK_COLUMN_ID: &str = "Task";

// ============================================================================
// Selection
// ============================================================================

/// The (task, unit) cell currently shown in the inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub task: Task,
    pub unit: Unit,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            task: Task::first(),
            unit: Unit::first(),
        }
    }
}

impl Selection {
    /// Apply a grid click.
    ///
    /// `row` is the task index, `column_id` the clicked column. Clicks on the
    /// task column leave the selection untouched and return `false`.
    pub fn pick_cell(&mut self, row: usize, column_id: &str) -> Result<bool, String> {
        if column_id == TASK_COLUMN_ID {
            return Ok(false);
        }
        let task = Task::from_index(row).ok_or_else(|| format!("Row out of range: {row}"))?;
        let unit =
            Unit::from_label(column_id).ok_or_else(|| format!("Unknown column: {column_id}"))?;
        self.task = task;
        self.unit = unit;
        Ok(true)
    }

    /// Task dropdown
    pub fn select_task(&mut self, index: usize) -> Result<(), String> {
        self.task = Task::from_index(index).ok_or_else(|| format!("Task out of range: {index}"))?;
        Ok(())
    }

    /// Unit dropdown
    pub fn select_unit(&mut self, index: usize) -> Result<(), String> {
        self.unit = Unit::from_index(index).ok_or_else(|| format!("Unit out of range: {index}"))?;
        Ok(())
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    pub task_index: usize,
    pub unit_index: usize,
    pub task: Task,
    pub unit: Unit,
    pub refresh: u64,
}

impl SelectionView {
    pub fn new(selection: Selection, refresh: u64) -> Self {
        Self {
            task_index: selection.task.index(),
            unit_index: selection.unit.index(),
            task: selection.task,
            unit: selection.unit,
            refresh,
        }
    }
}

/// Body of `POST /api/selection/cell`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickCellRequest {
    pub row: usize,
    pub column_id: String,
}

/// Body of `POST /api/selection/task` and `POST /api/selection/unit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectIndexRequest {
    pub index: usize,
}
