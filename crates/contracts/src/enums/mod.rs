pub mod document_kind;
pub mod status;

pub use document_kind::DocumentKind;
pub use status::Status;
