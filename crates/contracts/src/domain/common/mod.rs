use serde::{Deserialize, Serialize};

/// `?task=..&unit=..` query addressing one grid cell by its labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUnitQuery {
    pub task: String,
    pub unit: String,
}
