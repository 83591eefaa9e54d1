/// Errors produced by write-time derivation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeriveError {
    /// The candidate's odometer reading is below its predecessor's. The
    /// predecessor's value is carried so the caller can tell the user what
    /// the reading must at least be.
    #[error("odometer reading below the previous record ({previous_odometer})")]
    OdometerRegression { previous_odometer: f64 },
}
