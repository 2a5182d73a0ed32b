pub mod aggregate;

pub use aggregate::{Task, TASK_LABELS};
