use std::collections::BTreeMap;

use tracing::debug;

use frota_types::Dataset;

use crate::round::round_to;

/// Deterministic full recomputation of every derived field.
///
/// Grouped by plate, ascending (date, time) order. The first record of each
/// vehicle resets to "unknown". A record whose odometer regresses relative
/// to the running tracker has its derived fields cleared and the tracker is
/// left where it was, so the error stays visible instead of being absorbed
/// into the next delta. Unlike write-time derivation this never fails: the
/// pass always finishes and degrades only the offending records.
pub fn recalc_all(dataset: &mut Dataset) {
    let mut order: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    let mut indices: Vec<usize> = (0..dataset.refuels.len()).collect();
    indices.sort_by_key(|&i| dataset.refuels[i].order_key());
    for i in indices {
        order
            .entry(dataset.refuels[i].plate.clone())
            .or_default()
            .push(i);
    }

    let mut degraded = 0usize;
    for (_, list) in &order {
        let mut tracker: Option<f64> = None;
        for &i in list {
            let r = &mut dataset.refuels[i];
            r.price_per_liter = if r.liters > 0.0 {
                round_to(r.total / r.liters, 3)
            } else {
                0.0
            };

            let Some(prev_odo) = tracker else {
                r.clear_derived();
                tracker = Some(r.odometer);
                continue;
            };

            if r.odometer < prev_odo {
                // Regression: degrade this record, keep the tracker.
                r.clear_derived();
                degraded += 1;
                continue;
            }

            let distance = r.odometer - prev_odo;
            r.distance = Some(round_to(distance, 1));
            r.consumption = if r.liters > 0.0 {
                Some(round_to(distance / r.liters, 2))
            } else {
                None
            };
            tracker = Some(r.odometer);
        }
    }

    debug!(
        refuels = dataset.refuels.len(),
        vehicles = order.len(),
        degraded,
        "derived fields recomputed"
    );
}

#[cfg(test)]
mod tests {
    use frota_types::{PayMode, Refuel, RefuelId};

    use super::*;

    fn refuel(plate: &str, date: &str, odo: f64, liters: f64, total: f64) -> Refuel {
        Refuel {
            id: RefuelId::new(),
            date: date.parse().unwrap(),
            time: None,
            plate: plate.into(),
            driver: String::new(),
            station: String::new(),
            fuel: String::new(),
            pay_mode: PayMode::Cash,
            pay_method: None,
            liters,
            total,
            odometer: odo,
            full_tank: false,
            notes: String::new(),
            price_per_liter: 0.0,
            distance: None,
            consumption: None,
        }
    }

    #[test]
    fn ascending_sequence_yields_consecutive_deltas() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-05", 1150.0, 10.0, 55.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-09", 1300.0, 12.0, 66.0));

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[0].distance, None);
        assert_eq!(ds.refuels[1].distance, Some(150.0));
        assert_eq!(ds.refuels[1].consumption, Some(15.0));
        assert_eq!(ds.refuels[2].distance, Some(150.0));
        assert_eq!(ds.refuels[2].consumption, Some(12.5));
    }

    #[test]
    fn regression_degrades_record_without_advancing_tracker() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-05", 900.0, 10.0, 55.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-09", 1100.0, 10.0, 55.0));

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[1].distance, None);
        assert_eq!(ds.refuels[1].consumption, None);
        // The third record measures against 1000, not against the bad 900.
        assert_eq!(ds.refuels[2].distance, Some(100.0));
    }

    #[test]
    fn vehicles_are_recomputed_independently() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));
        ds.refuels.push(refuel("ZZZ9999", "2024-03-02", 400.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-03", 1080.0, 10.0, 50.0));
        ds.refuels.push(refuel("ZZZ9999", "2024-03-04", 520.0, 10.0, 50.0));

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[2].distance, Some(80.0));
        assert_eq!(ds.refuels[3].distance, Some(120.0));
    }

    #[test]
    fn temporal_order_wins_over_insertion_order() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-09", 1300.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[1].distance, None);
        assert_eq!(ds.refuels[0].distance, Some(300.0));
    }

    #[test]
    fn price_per_liter_is_recomputed_for_every_record() {
        let mut ds = Dataset::default();
        let mut r = refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 57.89);
        r.price_per_liter = 99.0; // stale
        ds.refuels.push(r);

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[0].price_per_liter, 5.789);
    }

    #[test]
    fn zero_liter_record_gets_zero_price_and_no_consumption() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-05", 1100.0, 0.0, 0.0));

        recalc_all(&mut ds);

        assert_eq!(ds.refuels[1].price_per_liter, 0.0);
        assert_eq!(ds.refuels[1].distance, Some(100.0));
        assert_eq!(ds.refuels[1].consumption, None);
    }

    #[test]
    fn recalc_is_idempotent() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel("ABC1234", "2024-03-01", 1000.0, 10.0, 50.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-05", 900.0, 10.0, 55.0));
        ds.refuels.push(refuel("ABC1234", "2024-03-09", 1100.0, 10.0, 55.0));

        recalc_all(&mut ds);
        let first = ds.clone();
        recalc_all(&mut ds);
        assert_eq!(ds, first);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// For any ascending odometer sequence, every record after the
            /// first derives exactly the delta to its predecessor.
            #[test]
            fn ascending_sequences_derive_exact_deltas(
                deltas in proptest::collection::vec(1u32..5000, 1..12)
            ) {
                let mut ds = Dataset::default();
                let mut odo = 0.0;
                for (i, d) in deltas.iter().enumerate() {
                    odo += f64::from(*d);
                    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                        + chrono::Days::new(i as u64);
                    ds.refuels.push(refuel("ABC1234", &date.to_string(), odo, 10.0, 50.0));
                }

                recalc_all(&mut ds);

                prop_assert_eq!(ds.refuels[0].distance, None);
                for (i, d) in deltas.iter().enumerate().skip(1) {
                    prop_assert_eq!(ds.refuels[i].distance, Some(f64::from(*d)));
                }
            }
        }
    }
}
