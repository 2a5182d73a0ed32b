pub mod repository;
pub mod service;

pub use repository::{CsvMatrixFile, MatrixPersistence};
pub use service::StatusMatrixStore;
