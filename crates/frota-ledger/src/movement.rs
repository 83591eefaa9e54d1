use tracing::{debug, warn};

use frota_types::{CreditMovement, Dataset, MovementId, MovementTag, RefuelId};

use crate::resolve::resolve_station;

/// Correlation data attached to a movement at apply time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovementMeta {
    pub refuel_id: Option<RefuelId>,
    pub note: Option<String>,
}

impl MovementMeta {
    pub fn for_refuel(id: RefuelId) -> Self {
        Self {
            refuel_id: Some(id),
            note: None,
        }
    }

    pub fn with_note(note: impl Into<String>) -> Self {
        let note = note.into();
        Self {
            refuel_id: None,
            note: (!note.is_empty()).then_some(note),
        }
    }
}

/// Result of a movement apply.
#[derive(Clone, Debug, PartialEq)]
pub enum MovementOutcome {
    /// The movement was appended and the balance updated.
    Applied {
        movement_id: MovementId,
        station_name: String,
        balance: f64,
    },
    /// The station reference did not resolve; nothing changed. Non-fatal:
    /// a rename or removal of a station must not abort the caller.
    Skipped { station_ref: String },
}

impl MovementOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// The resulting balance, when the movement was applied.
    pub fn balance(&self) -> Option<f64> {
        match self {
            Self::Applied { balance, .. } => Some(*balance),
            Self::Skipped { .. } => None,
        }
    }
}

/// Apply a signed delta to a station's balance and append the matching
/// immutable movement.
///
/// This is the only way balances and the movement history change, so the
/// audit invariant (balance == sum of movements) holds by construction.
pub fn apply_movement(
    dataset: &mut Dataset,
    station_ref: &str,
    delta: f64,
    tag: MovementTag,
    meta: MovementMeta,
) -> MovementOutcome {
    let Some(index) = resolve_station(dataset, station_ref) else {
        warn!(station = station_ref, %tag, delta, "station not found, movement skipped");
        return MovementOutcome::Skipped {
            station_ref: station_ref.to_string(),
        };
    };

    let station = &mut dataset.stations[index];
    station.credit += delta;
    let balance = station.credit;
    let station_id = station.id;
    let station_name = station.name.clone();

    let movement = CreditMovement {
        id: MovementId::new(),
        ts: chrono::Utc::now(),
        station_id,
        delta,
        tag,
        refuel_id: meta.refuel_id,
        note: meta.note,
    };
    let movement_id = movement.id;
    dataset.credit_movements.push(movement);

    debug!(station = %station_name, %tag, delta, balance, "movement applied");
    MovementOutcome::Applied {
        movement_id,
        station_name,
        balance,
    }
}
