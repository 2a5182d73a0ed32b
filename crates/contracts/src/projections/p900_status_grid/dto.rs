use serde::{Deserialize, Serialize};

use crate::domain::a001_task::Task;
use crate::domain::a002_unit::Unit;
use crate::enums::status::Status;

/// One rendered cell of the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridCellDto {
    pub unit: Unit,
    pub status: Status,
    pub color: String,
    pub bold: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRowDto {
    pub task: Task,
    pub cells: Vec<GridCellDto>,
}

/// Full status grid, rows in task order and cells in unit order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDto {
    pub units: Vec<Unit>,
    pub rows: Vec<GridRowDto>,
    pub refresh: u64,
}
