use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use frota_types::Dataset;

use crate::error::{StoreError, StoreResult};
use crate::traits::SnapshotStore;

/// JSON snapshot store backed by a single file.
///
/// Saves go through a temp file in the same directory followed by an atomic
/// rename, so a crash mid-write can never leave a half-written snapshot.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Dataset {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet, starting fresh");
                return Dataset::seeded();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "snapshot unreadable, starting fresh");
                return Dataset::seeded();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "snapshot corrupt, starting fresh");
                Dataset::seeded()
            }
        }
    }

    fn save(&self, dataset: &mut Dataset) -> StoreResult<()> {
        dataset.meta.updated_at = chrono::Utc::now();
        let json = serde_json::to_string_pretty(dataset)?;

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir)?;
        }

        // Temp file must live in the target directory for the rename to be
        // atomic on the same filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Replace(e.to_string()))?;

        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
