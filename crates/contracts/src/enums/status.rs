use serde::{Deserialize, Serialize};

/// Progress status of one (task, unit) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "To do")]
    ToDo,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Non-conforming")]
    NonConforming,
}

impl Status {
    /// Label stored in the status file and shown in the grid
    pub fn label(&self) -> &'static str {
        match self {
            Status::ToDo => "To do",
            Status::InProgress => "In progress",
            Status::Ok => "OK",
            Status::NonConforming => "Non-conforming",
        }
    }

    /// Background colour of the grid cell
    pub fn color(&self) -> &'static str {
        match self {
            Status::ToDo => "#ffffff",
            Status::InProgress => "#fff3cd",
            Status::Ok => "#d4edda",
            Status::NonConforming => "#f8d7da",
        }
    }

    /// Final states are rendered in bold
    pub fn is_emphasized(&self) -> bool {
        matches!(self, Status::Ok | Status::NonConforming)
    }

    pub fn all() -> Vec<Status> {
        vec![
            Status::ToDo,
            Status::InProgress,
            Status::Ok,
            Status::NonConforming,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "To do" => Some(Status::ToDo),
            "In progress" => Some(Status::InProgress),
            "OK" => Some(Status::Ok),
            "Non-conforming" => Some(Status::NonConforming),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
