//! Snapshot persistence for the Frota fuel tracker.
//!
//! The tracker treats the whole [`frota_types::Dataset`] as one opaque
//! snapshot: load it at startup, save it after every mutating operation.
//! This crate owns that boundary.
//!
//! # Design Rules
//!
//! 1. `load()` never fails: a missing or corrupt snapshot recovers to the
//!    seeded default dataset (with a warning), because a broken file must
//!    not brick an offline tool.
//! 2. `save()` stamps the snapshot's `updated_at` and replaces the target
//!    file atomically (temp file in the same directory, then persist).
//! 3. The store never interprets the dataset beyond (de)serializing it.
//!
//! # Backends
//!
//! - [`JsonFileStore`]: pretty-printed JSON on disk
//! - [`InMemoryStore`]: for tests and embedding

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::SnapshotStore;
