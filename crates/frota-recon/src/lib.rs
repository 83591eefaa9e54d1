//! Idempotent reconciliation passes run once at process start, after the
//! snapshot is loaded and before first use.
//!
//! Legacy and imported datasets encode payment inconsistently: free-text
//! labels instead of the canonical modes, and credit-mode refuels whose
//! station debit was never posted. These passes normalize labels through
//! the finite mapping table and backfill the missing debits. Both are
//! best-effort and never block startup; both return how much they changed
//! so the caller persists only when something did.

pub mod credits;
pub mod normalize;

pub use credits::reconcile_station_credits;
pub use normalize::normalize_legacy_pay_modes;
