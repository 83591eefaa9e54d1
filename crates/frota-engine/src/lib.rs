//! Refuel derivation engine.
//!
//! Computes the fields a refuel record cannot state on its own:
//! price-per-liter from total and liters, and distance/consumption from the
//! predecessor record of the same vehicle in (date, time) order.
//!
//! Two entry points with deliberately different failure behavior:
//!
//! - [`compute_derived`] gates write-time correctness: an odometer reading
//!   below the predecessor's is a hard error and the caller must not
//!   persist the record.
//! - [`recalc_all`] is resilient housekeeping run after edits, deletes and
//!   imports elsewhere in the dataset: a regression degrades only the
//!   offending record to "unknown" and the batch always finishes.

pub mod derive;
pub mod error;
pub mod recalc;
pub mod round;

pub use derive::{compute_derived, find_predecessor, Derived};
pub use error::DeriveError;
pub use recalc::recalc_all;
pub use round::round_to;
