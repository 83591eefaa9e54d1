use frota_types::{Dataset, EntityId};

/// Tolerance for comparing cached balances against movement sums. Balances
/// are accumulated in f64, so exact equality is too strict.
const EPSILON: f64 = 1e-6;

/// Audit of one station: cached balance vs. the sum of its movements.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditReport {
    pub station_id: EntityId,
    pub station_name: String,
    pub balance: f64,
    pub movement_sum: f64,
    pub movement_count: usize,
}

impl AuditReport {
    /// Whether the cached balance matches the ledger.
    pub fn in_sync(&self) -> bool {
        (self.balance - self.movement_sum).abs() < EPSILON
    }

    /// balance − movement sum. Non-zero means the cache drifted, e.g. a
    /// balance edited outside the ledger in an imported snapshot.
    pub fn drift(&self) -> f64 {
        self.balance - self.movement_sum
    }
}

/// Audit a single station by index.
pub fn audit_station(dataset: &Dataset, index: usize) -> AuditReport {
    let station = &dataset.stations[index];
    let movements: Vec<_> = dataset
        .credit_movements
        .iter()
        .filter(|m| m.station_id == station.id)
        .collect();

    AuditReport {
        station_id: station.id,
        station_name: station.name.clone(),
        balance: station.credit,
        movement_sum: movements.iter().map(|m| m.delta).sum(),
        movement_count: movements.len(),
    }
}

/// Audit every station.
pub fn audit_stations(dataset: &Dataset) -> Vec<AuditReport> {
    (0..dataset.stations.len())
        .map(|i| audit_station(dataset, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use frota_types::{MovementTag, Station};

    use crate::movement::{apply_movement, MovementMeta};

    use super::*;

    #[test]
    fn balance_equals_movement_sum_after_applies() {
        let mut ds = Dataset::default();
        ds.stations.push(Station::new("Posto A"));

        apply_movement(&mut ds, "Posto A", 300.0, MovementTag::Topup, MovementMeta::default());
        apply_movement(&mut ds, "Posto A", -120.0, MovementTag::Refuel, MovementMeta::default());
        apply_movement(&mut ds, "Posto A", 120.0, MovementTag::RefuelRevert, MovementMeta::default());

        let report = audit_station(&ds, 0);
        assert!(report.in_sync());
        assert_eq!(report.movement_count, 3);
        assert_eq!(report.movement_sum, 300.0);
    }

    #[test]
    fn externally_edited_balance_shows_as_drift() {
        let mut ds = Dataset::default();
        ds.stations.push(Station::new("Posto A"));
        apply_movement(&mut ds, "Posto A", 100.0, MovementTag::Topup, MovementMeta::default());

        // Simulate a hand-edited snapshot.
        ds.stations[0].credit = 250.0;

        let report = audit_station(&ds, 0);
        assert!(!report.in_sync());
        assert_eq!(report.drift(), 150.0);
    }

    #[test]
    fn stations_are_audited_independently() {
        let mut ds = Dataset::default();
        ds.stations.push(Station::new("Posto A"));
        ds.stations.push(Station::new("Posto B"));
        apply_movement(&mut ds, "Posto A", 50.0, MovementTag::Topup, MovementMeta::default());

        let reports = audit_stations(&ds);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].movement_count, 1);
        assert_eq!(reports[1].movement_count, 0);
        assert!(reports.iter().all(AuditReport::in_sync));
    }
}
