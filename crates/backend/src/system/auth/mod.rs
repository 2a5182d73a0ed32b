pub mod access;
pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use access::Access;
