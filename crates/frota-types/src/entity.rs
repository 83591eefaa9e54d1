//! Registry entities: vehicles, drivers, stations, fuels, and expenses.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A fleet vehicle. The plate is the user-facing key refuels reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: EntityId,
    pub plate: String,
    #[serde(default)]
    pub description: String,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            plate: plate.into().trim().to_uppercase(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: EntityId,
    pub name: String,
}

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }
}

/// A fuel station with its running signed credit balance.
///
/// The balance is a cache: the ledger movements are the source of truth and
/// the two are kept in sync by construction (movements are only ever
/// appended together with a balance update).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: EntityId,
    pub name: String,
    /// Prepaid credit balance. Negative means the fleet owes the station.
    #[serde(default)]
    pub credit: f64,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            credit: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    pub id: EntityId,
    pub name: String,
}

impl Fuel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
        }
    }
}

/// A non-fuel expense. Stored in the snapshot; the engine never derives
/// anything from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub driver: Option<String>,
    pub kind: String,
    pub value: f64,
    #[serde(default)]
    pub description: String,
}
