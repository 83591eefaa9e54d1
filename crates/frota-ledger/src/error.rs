/// Errors produced by ledger operations.
///
/// An unresolved station is deliberately *not* an error: movement apply
/// reports it as an inspectable skip so a refuel save never aborts because
/// its station was renamed or removed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("top-up amount must be positive, got {amount}")]
    InvalidTopUp { amount: f64 },
}
