use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::a003_status_matrix::{Matrix, StatusSummary};
use contracts::enums::Status;

use super::repository::MatrixPersistence;
use crate::shared::error::TrackerError;
use crate::system::auth::Access;

/// Owner of the task × unit status grid.
///
/// Every successful write is persisted before the call returns.
pub struct StatusMatrixStore {
    persistence: Box<dyn MatrixPersistence>,
    matrix: Matrix,
}

impl StatusMatrixStore {
    /// Read the grid, or create and persist a default one on first start.
    ///
    /// A stored grid that cannot be parsed is reported, never replaced.
    pub fn load(persistence: Box<dyn MatrixPersistence>) -> Result<Self, TrackerError> {
        let matrix = match persistence.read()? {
            Some(matrix) => {
                tracing::info!("Status grid loaded from {}", persistence.describe());
                matrix
            }
            None => {
                let matrix = Matrix::new_default();
                persistence.write(&matrix)?;
                tracing::info!(
                    "Status grid initialized with defaults at {}",
                    persistence.describe()
                );
                matrix
            }
        };

        Ok(Self {
            persistence,
            matrix,
        })
    }

    pub fn get_status(&self, task: Task, unit: Unit) -> Status {
        self.matrix.get(task, unit)
    }

    /// Overwrite one cell and persist the whole grid.
    ///
    /// Returns the previous status. On a failed write the cell is restored
    /// and the error is returned.
    pub fn set_status(
        &mut self,
        access: Access,
        task: Task,
        unit: Unit,
        status: Status,
    ) -> Result<Status, TrackerError> {
        if let Err(e) = access.require_write() {
            tracing::warn!("Status change refused for {} / {}: read-only", task, unit);
            return Err(e);
        }

        let previous = self.matrix.set(task, unit, status);
        if let Err(e) = self.persistence.write(&self.matrix) {
            self.matrix.set(task, unit, previous);
            tracing::error!("Failed to persist status of {} / {}: {}", task, unit, e);
            return Err(e);
        }

        tracing::info!("Status of {} / {}: {} -> {}", task, unit, previous, status);
        Ok(previous)
    }

    /// Re-read the grid from storage, dropping the in-memory copy.
    ///
    /// Picks up edits made to the file outside the server. A file that no
    /// longer parses leaves the in-memory grid as it was.
    pub fn reload(&mut self, access: Access) -> Result<(), TrackerError> {
        if let Err(e) = access.require_write() {
            tracing::warn!("Status grid reload refused: read-only");
            return Err(e);
        }

        match self.persistence.read()? {
            Some(matrix) => {
                self.matrix = matrix;
                tracing::info!("Status grid reloaded from {}", self.persistence.describe());
            }
            None => tracing::warn!(
                "Nothing stored at {}, keeping the in-memory grid",
                self.persistence.describe()
            ),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> &Matrix {
        &self.matrix
    }

    pub fn summary(&self) -> StatusSummary {
        self.matrix.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::super::repository::memory::InMemoryMatrix;
    use super::super::repository::CsvMatrixFile;
    use super::*;
    use tempfile::TempDir;

    fn axes() -> Task {
        Task::first()
    }

    fn unit(number: usize) -> Unit {
        Unit::from_index(number - 1).unwrap()
    }

    #[test]
    fn test_fresh_store_is_all_to_do_and_persisted() {
        let memory = InMemoryMatrix::default();
        let store = StatusMatrixStore::load(Box::new(memory.clone())).unwrap();

        for task in Task::all() {
            for unit in Unit::all() {
                assert_eq!(store.get_status(task, unit), Status::ToDo);
            }
        }
        assert_eq!(memory.writes(), 1);
        assert_eq!(memory.stored(), Some(Matrix::new_default()));
    }

    #[test]
    fn test_existing_grid_is_not_rewritten_on_load() {
        let memory = InMemoryMatrix::default();
        let mut stored = Matrix::new_default();
        stored.set(axes(), unit(3), Status::InProgress);
        memory.write(&stored).unwrap();

        let store = StatusMatrixStore::load(Box::new(memory.clone())).unwrap();
        assert_eq!(store.get_status(axes(), unit(3)), Status::InProgress);
        assert_eq!(memory.writes(), 1);
    }

    #[test]
    fn test_set_status_round_trips_through_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.csv");

        let mut store = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(&path))).unwrap();
        let previous = store
            .set_status(Access::Engineer, axes(), unit(1), Status::Ok)
            .unwrap();
        assert_eq!(previous, Status::ToDo);

        let reloaded = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(&path))).unwrap();
        assert_eq!(reloaded.get_status(axes(), unit(1)), Status::Ok);
        assert_eq!(reloaded.get_status(axes(), unit(2)), Status::ToDo);

        let mut expected = Matrix::new_default();
        expected.set(axes(), unit(1), Status::Ok);
        assert_eq!(reloaded.snapshot(), &expected);
    }

    #[test]
    fn test_read_only_set_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.csv");

        let mut store = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(&path))).unwrap();
        let before = std::fs::read(&path).unwrap();

        let result = store.set_status(Access::ReadOnly, axes(), unit(1), Status::Ok);
        assert!(matches!(result, Err(TrackerError::Unauthorized)));
        assert_eq!(store.get_status(axes(), unit(1)), Status::ToDo);
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_failed_write_restores_cell() {
        let memory = InMemoryMatrix::default();
        let mut store = StatusMatrixStore::load(Box::new(memory.clone())).unwrap();
        memory.fail_writes(true);

        let result = store.set_status(Access::Engineer, axes(), unit(4), Status::NonConforming);
        assert!(matches!(result, Err(TrackerError::Io(_))));
        assert_eq!(store.get_status(axes(), unit(4)), Status::ToDo);
        assert_eq!(memory.stored(), Some(Matrix::new_default()));
    }

    #[test]
    fn test_corrupt_file_fails_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.csv");
        std::fs::write(&path, "Task,Unit 1\n1. Reception of axes,OK\n").unwrap();

        let result = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(&path)));
        assert!(matches!(result, Err(TrackerError::StorageUnavailable(_))));
        // Never overwritten with defaults
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Task,Unit 1\n1. Reception of axes,OK\n"
        );
    }

    #[test]
    fn test_reload_picks_up_external_edit() {
        let memory = InMemoryMatrix::default();
        let mut store = StatusMatrixStore::load(Box::new(memory.clone())).unwrap();

        let mut edited = Matrix::new_default();
        edited.set(Task::from_index(1).unwrap(), unit(50), Status::Ok);
        memory.write(&edited).unwrap();

        assert!(matches!(
            store.reload(Access::ReadOnly),
            Err(TrackerError::Unauthorized)
        ));
        assert_eq!(
            store.get_status(Task::from_index(1).unwrap(), unit(50)),
            Status::ToDo
        );

        store.reload(Access::Engineer).unwrap();
        assert_eq!(
            store.get_status(Task::from_index(1).unwrap(), unit(50)),
            Status::Ok
        );
    }

    #[test]
    fn test_reload_of_corrupt_file_keeps_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.csv");
        let mut store = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(&path))).unwrap();
        store
            .set_status(Access::Engineer, axes(), unit(9), Status::InProgress)
            .unwrap();

        std::fs::write(&path, "not,a,grid\n").unwrap();
        assert!(matches!(
            store.reload(Access::Engineer),
            Err(TrackerError::StorageUnavailable(_))
        ));
        assert_eq!(store.get_status(axes(), unit(9)), Status::InProgress);
    }
}
