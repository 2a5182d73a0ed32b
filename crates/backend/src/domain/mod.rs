pub mod a003_status_matrix;
pub mod a004_document;
pub mod a005_selection;
