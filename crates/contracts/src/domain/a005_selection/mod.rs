pub mod aggregate;

pub use aggregate::{
    PickCellRequest, SelectIndexRequest, Selection, SelectionView, TASK_COLUMN_ID,
};
