use frota_types::{Dataset, Refuel};

use crate::error::DeriveError;
use crate::round::round_to;

/// Derived fields for one refuel, ready to be written onto the record.
#[derive(Clone, Debug, PartialEq)]
pub struct Derived {
    /// total / liters, 3 decimals; 0 when liters is not positive.
    pub price_per_liter: f64,
    /// Odometer delta to the predecessor, 1 decimal; `None` when the
    /// vehicle has no earlier record.
    pub distance: Option<f64>,
    /// distance / liters, 2 decimals; `None` without distance or liters.
    pub consumption: Option<f64>,
}

impl Derived {
    /// Write these fields onto a record.
    pub fn apply_to(&self, refuel: &mut Refuel) {
        refuel.price_per_liter = self.price_per_liter;
        refuel.distance = self.distance;
        refuel.consumption = self.consumption;
    }
}

/// The immediate predecessor of `candidate` for its vehicle: the latest
/// record with a strictly earlier (date, time) key, excluding the candidate
/// itself so an edit never compares a record against its own stored copy.
pub fn find_predecessor<'a>(dataset: &'a Dataset, candidate: &Refuel) -> Option<&'a Refuel> {
    let key = candidate.order_key();
    dataset
        .refuels_for_plate(&candidate.plate)
        .into_iter()
        .filter(|r| r.id != candidate.id)
        .take_while(|r| r.order_key() < key)
        .last()
}

/// Compute the derived fields for one candidate against its vehicle's
/// history.
///
/// Fails with [`DeriveError::OdometerRegression`] when the candidate's
/// odometer is below the predecessor's; the caller must not persist the
/// record in that case.
pub fn compute_derived(dataset: &Dataset, candidate: &Refuel) -> Result<Derived, DeriveError> {
    let price_per_liter = if candidate.liters > 0.0 {
        round_to(candidate.total / candidate.liters, 3)
    } else {
        0.0
    };

    let Some(prev) = find_predecessor(dataset, candidate) else {
        return Ok(Derived {
            price_per_liter,
            distance: None,
            consumption: None,
        });
    };

    if candidate.odometer < prev.odometer {
        return Err(DeriveError::OdometerRegression {
            previous_odometer: prev.odometer,
        });
    }

    let distance = candidate.odometer - prev.odometer;
    let consumption = if candidate.liters > 0.0 {
        Some(round_to(distance / candidate.liters, 2))
    } else {
        None
    };

    Ok(Derived {
        price_per_liter,
        distance: Some(round_to(distance, 1)),
        consumption,
    })
}
