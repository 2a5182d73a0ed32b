use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::a003_status_matrix::{CsvMatrixFile, StatusMatrixStore};
use crate::domain::a004_document::DocumentRegistry;
use crate::domain::a005_selection::SelectionState;
use crate::shared::config::Config;
use crate::shared::error::TrackerError;
use crate::system::auth::jwt::AdminGate;

/// Everything a request handler needs, built once per process
#[derive(Clone)]
pub struct AppState {
    matrix: Arc<RwLock<StatusMatrixStore>>,
    pub documents: Arc<DocumentRegistry>,
    pub selection: SelectionState,
    pub gate: Arc<AdminGate>,
}

impl AppState {
    pub fn new(matrix: StatusMatrixStore, documents: DocumentRegistry, gate: AdminGate) -> Self {
        Self {
            matrix: Arc::new(RwLock::new(matrix)),
            documents: Arc::new(documents),
            selection: SelectionState::new(),
            gate: Arc::new(gate),
        }
    }

    /// Load the status grid and open the documents directory from configuration
    pub fn from_config(config: &Config) -> Result<Self, TrackerError> {
        let status_file = config.status_file_path();
        let documents_dir = config.documents_dir_path();

        let matrix = StatusMatrixStore::load(Box::new(CsvMatrixFile::new(status_file)))?;
        let documents = DocumentRegistry::open(documents_dir)?;
        let gate = AdminGate::new(
            config.auth.admin_secret.clone(),
            config.auth.token_lifetime_hours,
        );

        Ok(Self::new(matrix, documents, gate))
    }

    pub fn matrix(&self) -> RwLockReadGuard<'_, StatusMatrixStore> {
        self.matrix.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn matrix_mut(&self) -> RwLockWriteGuard<'_, StatusMatrixStore> {
        self.matrix.write().unwrap_or_else(PoisonError::into_inner)
    }
}
