//! The persisted snapshot: every collection the tracker owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Driver, Expense, Fuel, Station, Vehicle};
use crate::movement::CreditMovement;
use crate::refuel::Refuel;

/// Current snapshot schema version.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetMeta {
    #[serde(default = "default_schema")]
    pub schema: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_schema() -> u32 {
    SCHEMA_VERSION
}

impl Default for DatasetMeta {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            schema: SCHEMA_VERSION,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The whole dataset. Single shared mutable structure: engine operations
/// take `&mut Dataset` and run to completion before the next one starts.
///
/// Every collection defaults to empty so hand-edited or older snapshots
/// with missing collections still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub meta: DatasetMeta,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub fuels: Vec<Fuel>,
    #[serde(default)]
    pub refuels: Vec<Refuel>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub credit_movements: Vec<CreditMovement>,
}

impl Dataset {
    /// Fresh dataset seeded with one example of each registry entity, the
    /// starting point for a new installation.
    pub fn seeded() -> Self {
        Self {
            meta: DatasetMeta::default(),
            vehicles: vec![Vehicle::new("AAA0A00", "Exemplo • Caminhonete")],
            drivers: vec![Driver::new("Motorista 1")],
            stations: vec![Station::new("Posto Central")],
            fuels: vec![Fuel::new("Diesel S10"), Fuel::new("Gasolina")],
            refuels: Vec::new(),
            expenses: Vec::new(),
            credit_movements: Vec::new(),
        }
    }

    /// Refuels for one plate, sorted by (date, time), ties in insertion
    /// order. The temporal order every derivation walks.
    pub fn refuels_for_plate(&self, plate: &str) -> Vec<&Refuel> {
        let mut list: Vec<&Refuel> = self.refuels.iter().filter(|r| r.plate == plate).collect();
        list.sort_by_key(|r| r.order_key());
        list
    }

    pub fn refuel_index(&self, id: crate::RefuelId) -> Option<usize> {
        self.refuels.iter().position(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collections_default_to_empty() {
        let ds: Dataset = serde_json::from_str("{}").unwrap();
        assert!(ds.vehicles.is_empty());
        assert!(ds.refuels.is_empty());
        assert!(ds.credit_movements.is_empty());
        assert_eq!(ds.meta.schema, SCHEMA_VERSION);
    }

    #[test]
    fn seeded_dataset_has_example_registry() {
        let ds = Dataset::seeded();
        assert_eq!(ds.vehicles.len(), 1);
        assert_eq!(ds.vehicles[0].plate, "AAA0A00");
        assert_eq!(ds.fuels.len(), 2);
        assert!(ds.refuels.is_empty());
    }

    #[test]
    fn refuels_for_plate_sorts_temporally() {
        use crate::{PayMode, Refuel, RefuelId};

        let mut ds = Dataset::default();
        for (date, odo) in [("2024-03-02", 1100.0), ("2024-03-01", 1000.0)] {
            ds.refuels.push(Refuel {
                id: RefuelId::new(),
                date: date.parse().unwrap(),
                time: None,
                plate: "ABC1234".into(),
                driver: String::new(),
                station: String::new(),
                fuel: String::new(),
                pay_mode: PayMode::Cash,
                pay_method: None,
                liters: 10.0,
                total: 50.0,
                odometer: odo,
                full_tank: false,
                notes: String::new(),
                price_per_liter: 0.0,
                distance: None,
                consumption: None,
            });
        }

        let sorted = ds.refuels_for_plate("ABC1234");
        assert_eq!(sorted.len(), 2);
        assert!(sorted[0].order_key() < sorted[1].order_key());
        assert!(ds.refuels_for_plate("ZZZ9999").is_empty());
    }
}
