use std::sync::Mutex;

use frota_types::Dataset;

use crate::error::StoreResult;
use crate::traits::SnapshotStore;

/// In-memory snapshot store for tests and embedding.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Option<Dataset>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, as if a snapshot had been saved earlier.
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            inner: Mutex::new(Some(dataset)),
        }
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Dataset {
        match self.inner.lock() {
            Ok(guard) => guard.clone().unwrap_or_else(Dataset::seeded),
            Err(_) => Dataset::seeded(),
        }
    }

    fn save(&self, dataset: &mut Dataset) -> StoreResult<()> {
        dataset.meta.updated_at = chrono::Utc::now();
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(dataset.clone());
        }
        Ok(())
    }
}
