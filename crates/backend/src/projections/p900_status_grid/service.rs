use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::a003_status_matrix::Matrix;
use contracts::projections::p900_status_grid::dto::{GridCellDto, GridDto, GridRowDto};

/// Render the full grid: one row per task, one coloured cell per unit
pub fn build_grid(matrix: &Matrix, refresh: u64) -> GridDto {
    let rows = Task::all()
        .map(|task| GridRowDto {
            task,
            cells: Unit::all()
                .map(|unit| {
                    let status = matrix.get(task, unit);
                    GridCellDto {
                        unit,
                        status,
                        color: status.color().to_string(),
                        bold: status.is_emphasized(),
                    }
                })
                .collect(),
        })
        .collect();

    GridDto {
        units: Unit::all().collect(),
        rows,
        refresh,
    }
}
