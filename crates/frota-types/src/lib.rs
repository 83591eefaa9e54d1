//! Foundation types for the Frota fuel tracker.
//!
//! This crate provides the data model shared by every other Frota crate:
//! record identifiers, payment modes (with the legacy label mapping),
//! the fleet entities, and the [`Dataset`] snapshot that all engine
//! operations receive as an explicit `&mut` parameter.
//!
//! # Key Types
//!
//! - [`EntityId`] / [`RefuelId`] / [`MovementId`]: time-ordered identifiers (UUID v7)
//! - [`PayMode`]: canonical payment mode plus preserved legacy text
//! - [`Refuel`]: one fueling record with derived distance/consumption fields
//! - [`CreditMovement`]: one immutable signed station-credit ledger entry
//! - [`Dataset`]: the persisted snapshot holding every collection

pub mod dataset;
pub mod entity;
pub mod id;
pub mod movement;
pub mod pay;
pub mod refuel;

pub use dataset::{Dataset, DatasetMeta};
pub use entity::{Driver, Expense, Fuel, Station, Vehicle};
pub use id::{EntityId, MovementId, RefuelId};
pub use movement::{CreditMovement, MovementTag};
pub use pay::PayMode;
pub use refuel::Refuel;
