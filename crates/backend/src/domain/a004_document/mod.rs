pub mod naming;
pub mod payload;
pub mod repository;

pub use repository::{DocumentRegistry, FILES_ROUTE};
