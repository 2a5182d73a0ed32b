use contracts::domain::a001_task::Task;
use contracts::domain::a002_unit::Unit;
use contracts::domain::a003_status_matrix::Matrix;
use contracts::enums::Status;
use std::path::PathBuf;

use crate::shared::error::TrackerError;

/// Header of the task-label column
pub const TASK_HEADER: &str = "Task";

/// Backing storage of the status grid
pub trait MatrixPersistence: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<Matrix>, TrackerError>;

    /// Replace the stored grid as a whole
    fn write(&self, matrix: &Matrix) -> Result<(), TrackerError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

// ============================================================================
// CSV file
// ============================================================================

/// Grid stored as CSV: header `Task,Unit 1,..,Unit 108`, one row per task
#[derive(Debug, Clone)]
pub struct CsvMatrixFile {
    path: PathBuf,
}

impl CsvMatrixFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl MatrixPersistence for CsvMatrixFile {
    fn read(&self) -> Result<Option<Matrix>, TrackerError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            TrackerError::StorageUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        parse_matrix(&text).map(Some).map_err(|reason| {
            TrackerError::StorageUnavailable(format!("{}: {}", self.path.display(), reason))
        })
    }

    fn write(&self, matrix: &Matrix) -> Result<(), TrackerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = render_matrix(matrix)?;

        // Write next to the target, then swap it in
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, &bytes)?;
        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse CSV text into a complete grid, checking headers and row labels
pub fn parse_matrix(text: &str) -> Result<Matrix, String> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read CSV headers: {}", e))?
        .clone();

    // The first header cell names the task column and is not checked
    let unit_headers: Vec<&str> = headers.iter().skip(1).collect();
    let expected: Vec<String> = Unit::all().map(|u| u.label()).collect();
    if unit_headers.len() != expected.len()
        || unit_headers.iter().zip(&expected).any(|(h, e)| h != e)
    {
        return Err(format!(
            "unit columns do not match Unit 1..Unit {} (found {} columns)",
            Unit::count(),
            unit_headers.len()
        ));
    }

    let mut rows = Vec::with_capacity(Task::count());
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("row {}: {}", row_index + 1, e))?;

        let task = Task::from_index(row_index)
            .ok_or_else(|| format!("unexpected extra row {}", row_index + 1))?;
        let label = record.get(0).unwrap_or_default();
        if label != task.label() {
            return Err(format!(
                "row {} is '{}', expected '{}'",
                row_index + 1,
                label,
                task.label()
            ));
        }
        if record.len() != Unit::count() + 1 {
            return Err(format!(
                "row '{}' has {} cells, expected {}",
                label,
                record.len() - 1,
                Unit::count()
            ));
        }

        let statuses = record
            .iter()
            .skip(1)
            .map(|cell| {
                Status::from_label(cell)
                    .ok_or_else(|| format!("row '{}': unknown status '{}'", label, cell))
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(statuses);
    }

    Matrix::from_rows(rows).ok_or_else(|| format!("expected {} task rows", Task::count()))
}

/// Serialize a grid to CSV bytes
pub fn render_matrix(matrix: &Matrix) -> Result<Vec<u8>, TrackerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec![TASK_HEADER.to_string()];
    header.extend(Unit::all().map(|u| u.label()));
    writer.write_record(&header)?;

    for task in Task::all() {
        let mut record = vec![task.label()];
        record.extend(matrix.row(task).iter().map(|s| s.label()));
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| TrackerError::Io(e.into_error()))
}

// ============================================================================
// In-memory, for tests
// ============================================================================
