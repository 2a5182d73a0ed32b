use contracts::domain::a005_selection::{Selection, SelectionView};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Inspected cell plus the refresh counter (in-memory, one per process)
#[derive(Clone, Default)]
pub struct SelectionState {
    selection: Arc<Mutex<Selection>>,
    refresh: Arc<AtomicU64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Selection {
        *self.lock()
    }

    pub fn view(&self) -> SelectionView {
        SelectionView::new(self.current(), self.refresh_count())
    }

    /// Grid click; `Ok(false)` when the task column was clicked
    pub fn pick_cell(&self, row: usize, column_id: &str) -> Result<bool, String> {
        self.lock().pick_cell(row, column_id)
    }

    pub fn select_task(&self, index: usize) -> Result<(), String> {
        self.lock().select_task(index)
    }

    pub fn select_unit(&self, index: usize) -> Result<(), String> {
        self.lock().select_unit(index)
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh.load(Ordering::SeqCst)
    }

    /// Signal a mutation that left the selection as is; returns the new value
    pub fn bump_refresh(&self) -> u64 {
        self.refresh.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn lock(&self) -> MutexGuard<'_, Selection> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
