pub mod aggregate;

pub use aggregate::{
    DocumentKey, DocumentKeyQuery, DocumentListDto, StoredDocument, UploadRequest,
    ACCEPTED_EXTENSIONS,
};
