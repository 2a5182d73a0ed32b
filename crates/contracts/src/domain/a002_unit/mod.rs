pub mod aggregate;

pub use aggregate::{Unit, UNIT_COUNT};
