//! Refuel records and their temporal ordering.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::id::RefuelId;
use crate::pay::PayMode;

/// One fueling event for a vehicle.
///
/// `distance` and `consumption` are derived from the predecessor record of
/// the same vehicle; `None` means "unknown" (first record, or an odometer
/// regression degraded during batch recompute) and is distinct from zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Refuel {
    pub id: RefuelId,
    pub date: NaiveDate,
    /// Time of day; missing on older records, which sort as midnight.
    #[serde(default)]
    pub time: Option<NaiveTime>,
    pub plate: String,
    #[serde(default)]
    pub driver: String,
    /// Station reference: the station name as registered, resolved by the
    /// ledger at apply time.
    #[serde(default)]
    pub station: String,
    #[serde(default)]
    pub fuel: String,
    #[serde(default)]
    pub pay_mode: PayMode,
    /// Pre-normalization label from legacy imports ("Crédito" etc.). Kept
    /// so the reconciliation pass can recover the mode when `pay_mode` was
    /// never set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_method: Option<String>,
    pub liters: f64,
    pub total: f64,
    pub odometer: f64,
    #[serde(default)]
    pub full_tank: bool,
    #[serde(default)]
    pub notes: String,
    // Derived fields, owned by the derivation engine.
    #[serde(default)]
    pub price_per_liter: f64,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
}

impl Refuel {
    /// Temporal ordering key: (date, time), missing time sorting first as
    /// midnight. Total per vehicle; ties keep insertion order.
    pub fn order_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Whether this record was paid on deferred station credit, consulting
    /// the legacy `pay_method` label when the canonical mode is absent.
    pub fn is_credit(&self) -> bool {
        if self.pay_mode.is_credit() {
            return true;
        }
        self.pay_method
            .as_deref()
            .and_then(PayMode::from_legacy_label)
            .is_some_and(|m| m.is_credit())
    }

    /// Clear the derived fields back to "unknown".
    pub fn clear_derived(&mut self) {
        self.distance = None;
        self.consumption = None;
    }
}
