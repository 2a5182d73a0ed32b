pub mod p900_status_grid;
pub mod p901_inspector;
pub mod p902_folder_view;
pub mod p903_catalog;
