use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Construction-acceptance steps, in display order.
///
/// The label is the identity of a task: it is the row key of the status file
/// and the first segment of every document file name.
pub const TASK_LABELS: [&str; 4] = [
    "1. Reception of axes",
    "2. Reception of footing excavation",
    "3. Reception of footings formwork and reinforcement",
    "4. Reception of footings concrete (Lab)",
];

// ============================================================================
// Task
// ============================================================================

/// One of the fixed construction-acceptance steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Task {
    index: usize,
}

impl Task {
    pub fn count() -> usize {
        TASK_LABELS.len()
    }

    /// All tasks in display order
    pub fn all() -> impl Iterator<Item = Task> {
        (0..TASK_LABELS.len()).map(|index| Task { index })
    }

    pub fn first() -> Self {
        Task { index: 0 }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < TASK_LABELS.len()).then_some(Task { index })
    }

    /// Exact label match, no trimming
    pub fn from_label(label: &str) -> Option<Self> {
        TASK_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|index| Task { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &'static str {
        TASK_LABELS[self.index]
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Task::from_label(&label).ok_or_else(|| de::Error::custom(format!("unknown task: {label}")))
    }
}
