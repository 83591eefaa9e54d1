use frota_engine::DeriveError;

/// Why one candidate was rejected. The batch continues past every one of
/// these; they surface in the import report with the record's index.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("vehicle plate is empty")]
    EmptyPlate,

    #[error("driver is empty")]
    EmptyDriver,

    #[error("liters must be positive, got {0}")]
    InvalidLiters(f64),

    #[error("total must be positive, got {0}")]
    InvalidTotal(f64),

    #[error("odometer must not be negative, got {0}")]
    InvalidOdometer(f64),

    #[error(transparent)]
    Derive(#[from] DeriveError),
}
