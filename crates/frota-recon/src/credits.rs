use std::collections::HashSet;

use tracing::{debug, warn};

use frota_ledger::{apply_movement, MovementMeta, MovementOutcome};
use frota_types::{Dataset, MovementTag, RefuelId};

/// Backfill the station debits missing for historical credit-mode refuels.
///
/// Imported and pre-ledger datasets contain refuels paid on credit that
/// never produced a `refuel`-tagged movement. For each such record this
/// posts the missing debit, correlated by refuel id. The correlation check
/// makes repeated runs no-ops, so the pass is safe to run at every startup.
///
/// Returns the number of debits posted.
pub fn reconcile_station_credits(dataset: &mut Dataset) -> usize {
    let mut covered: HashSet<RefuelId> = dataset
        .credit_movements
        .iter()
        .filter(|m| m.tag == MovementTag::Refuel)
        .filter_map(|m| m.refuel_id)
        .collect();

    let missing: Vec<(RefuelId, String, f64)> = dataset
        .refuels
        .iter()
        .filter(|r| r.is_credit() && !r.station.trim().is_empty() && !covered.contains(&r.id))
        .map(|r| (r.id, r.station.clone(), r.total))
        .collect();

    let mut posted = 0usize;
    for (id, station, total) in missing {
        let outcome = apply_movement(
            dataset,
            &station,
            -total,
            MovementTag::Refuel,
            MovementMeta::for_refuel(id),
        );
        match outcome {
            MovementOutcome::Applied { .. } => {
                covered.insert(id);
                posted += 1;
            }
            MovementOutcome::Skipped { station_ref } => {
                warn!(refuel = %id, station = %station_ref, "backfill skipped, station unresolved");
            }
        }
    }

    if posted > 0 {
        debug!(posted, "missing credit debits backfilled");
    }
    posted
}
