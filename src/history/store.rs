use crate::estimation::EstimationResult;
use crate::history::HistoryFormat;
use std::io::Error;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Session history of estimation results, oldest first.
///
/// Every operation goes through one lock, so a store can be shared behind
/// an `Arc` between threads. Reads hand out cloned snapshots.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: Mutex<Vec<EstimationResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, result: EstimationResult) {
        let mut entries = self.lock();
        debug!(id = %result.id(), position = entries.len(), "appending result");
        entries.push(result);
    }

    /// Snapshot of all results in insertion order.
    pub fn list(&self) -> Vec<EstimationResult> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        if !entries.is_empty() {
            info!(removed = entries.len(), "clearing result history");
        }
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn latest(&self) -> Option<EstimationResult> {
        self.lock().last().cloned()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: HistoryFormat) -> Result<(), Error> {
        let snapshot = self.list();
        fmt.write_to_path(&snapshot, path)
    }

    // A panic while holding the lock cannot leave the Vec half-updated.
    fn lock(&self) -> MutexGuard<'_, Vec<EstimationResult>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
