//! Station-credit ledger.
//!
//! Each station carries a running signed balance for refuels paid on
//! deferred "station credit". The balance is a cache; the append-only list
//! of [`frota_types::CreditMovement`] entries is the source of truth, and
//! the two only ever change together through [`apply_movement`].
//!
//! The refuel save protocol lives here too: reverse the previous debit when
//! editing a credit refuel, store the record, post the new debit, advise on
//! a negative balance. Corrections are always offsetting entries; the
//! movement history is never rewritten.

pub mod audit;
pub mod error;
pub mod movement;
pub mod protocol;
pub mod resolve;

pub use audit::{audit_station, audit_stations, AuditReport};
pub use error::LedgerError;
pub use movement::{apply_movement, MovementMeta, MovementOutcome};
pub use protocol::{delete_refuel, save_refuel, top_up, SaveOutcome};
pub use resolve::resolve_station;
