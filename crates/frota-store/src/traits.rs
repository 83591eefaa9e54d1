use frota_types::Dataset;

use crate::error::StoreResult;

/// Snapshot persistence boundary.
///
/// All implementations must satisfy these invariants:
/// - `load` never fails: missing or corrupt snapshots recover to the seeded
///   default dataset rather than propagating an error.
/// - `save` stamps `meta.updated_at` before persisting and is invoked by
///   the caller after every mutating engine operation.
pub trait SnapshotStore {
    /// Load the snapshot, recovering to [`Dataset::seeded`] when nothing
    /// usable exists.
    fn load(&self) -> Dataset;

    /// Persist the snapshot, stamping its update time.
    fn save(&self, dataset: &mut Dataset) -> StoreResult<()>;
}
