//! Station-credit ledger movements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{EntityId, MovementId, RefuelId};

/// Cause of a credit movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovementTag {
    /// Prepaid credit added to the station.
    Topup,
    /// Debit for a refuel paid on station credit.
    Refuel,
    /// Offsetting entry undoing a prior refuel debit before an edit.
    RefuelRevert,
}

impl MovementTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topup => "topup",
            Self::Refuel => "refuel",
            Self::RefuelRevert => "refuel-revert",
        }
    }
}

impl std::fmt::Display for MovementTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One signed ledger entry. Immutable once appended: corrections are made
/// with offsetting entries, never by editing or deleting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditMovement {
    pub id: MovementId,
    pub ts: DateTime<Utc>,
    pub station_id: EntityId,
    pub delta: f64,
    pub tag: MovementTag,
    /// Correlation to the refuel that caused this movement, when any.
    /// At most one live `refuel`-tagged debit exists per refuel id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refuel_id: Option<RefuelId>,
    /// Free-text correlation for top-ups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
