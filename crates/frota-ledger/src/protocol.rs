use tracing::{debug, info};

use frota_engine::{compute_derived, recalc_all, DeriveError, Derived};
use frota_types::{Dataset, MovementTag, Refuel, RefuelId};

use crate::error::LedgerError;
use crate::movement::{apply_movement, MovementMeta, MovementOutcome};

/// Result of a successful refuel save.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOutcome {
    pub id: RefuelId,
    /// `false` when an existing record was edited in place.
    pub created: bool,
    pub derived: Derived,
    /// Reversal posted for the previous version of an edited credit refuel.
    pub reversal: Option<MovementOutcome>,
    /// Debit posted for the saved record when paid on credit.
    pub debit: Option<MovementOutcome>,
    /// Advisory only: the station balance after the debit when it went
    /// negative. The save still succeeded.
    pub negative_balance: Option<f64>,
}

/// Save a new or edited refuel.
///
/// Protocol:
/// 1. Derive against the vehicle history; an odometer regression rejects
///    the save with no state change.
/// 2. When editing a refuel previously on credit, post an offsetting
///    `refuel-revert` for the old total before overwriting the record.
/// 3. Store the record with its derived fields.
/// 4. When the new record is on credit, post the `refuel` debit correlated
///    by refuel id. A negative resulting balance is an advisory, not an
///    error.
/// 5. Recompute all derived fields, since the edit may have reordered the
///    vehicle's history.
pub fn save_refuel(dataset: &mut Dataset, refuel: Refuel) -> Result<SaveOutcome, DeriveError> {
    let derived = compute_derived(dataset, &refuel)?;

    let existing = dataset.refuel_index(refuel.id);
    let mut reversal = None;
    if let Some(i) = existing {
        let prev = dataset.refuels[i].clone();
        if prev.is_credit() {
            reversal = Some(apply_movement(
                dataset,
                &prev.station,
                prev.total,
                MovementTag::RefuelRevert,
                MovementMeta::for_refuel(prev.id),
            ));
        }
    }

    let mut record = refuel;
    derived.apply_to(&mut record);
    let id = record.id;
    let is_credit = record.is_credit();
    let station = record.station.clone();
    let total = record.total;

    let created = match existing {
        Some(i) => {
            dataset.refuels[i] = record;
            false
        }
        None => {
            dataset.refuels.push(record);
            true
        }
    };

    let mut debit = None;
    let mut negative_balance = None;
    if is_credit {
        let outcome = apply_movement(
            dataset,
            &station,
            -total,
            MovementTag::Refuel,
            MovementMeta::for_refuel(id),
        );
        negative_balance = outcome.balance().filter(|b| *b < 0.0);
        debit = Some(outcome);
    }

    recalc_all(dataset);

    info!(%id, created, credit = is_credit, "refuel saved");
    Ok(SaveOutcome {
        id,
        created,
        derived,
        reversal,
        debit,
        negative_balance,
    })
}

/// Delete a refuel and recompute derived fields.
///
/// Returns `false` when no record had that id. Deliberately does not
/// reverse the refuel's ledger debit: movements are append-only and the
/// correction, when wanted, is a manual offsetting entry. The audit report
/// makes the drift visible.
pub fn delete_refuel(dataset: &mut Dataset, id: RefuelId) -> bool {
    let Some(i) = dataset.refuel_index(id) else {
        return false;
    };
    dataset.refuels.remove(i);
    recalc_all(dataset);
    debug!(%id, "refuel deleted");
    true
}

/// Add prepaid credit to a station.
pub fn top_up(
    dataset: &mut Dataset,
    station_ref: &str,
    amount: f64,
    note: &str,
) -> Result<MovementOutcome, LedgerError> {
    if amount <= 0.0 {
        return Err(LedgerError::InvalidTopUp { amount });
    }
    Ok(apply_movement(
        dataset,
        station_ref,
        amount,
        MovementTag::Topup,
        MovementMeta::with_note(note),
    ))
}
