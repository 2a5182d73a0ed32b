pub mod service;

pub use service::SelectionState;
