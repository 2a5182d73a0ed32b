pub mod aggregate;

pub use aggregate::{Matrix, SetStatusRequest, StatusCellDto, StatusSummary, TaskSummary};
