use tracing::debug;

use frota_types::{Dataset, PayMode};

/// Rewrite legacy payment labels to the canonical modes.
///
/// Two sources, mirroring how old datasets were written:
/// - `pay_mode` holding an unrecognized label ("Crédito", "DINHEIRO", ...)
///   that the mapping table knows;
/// - `pay_mode` never set while the legacy `pay_method` field carries the
///   label (older CSV imports).
///
/// Returns the number of records changed; idempotent, since a canonical
/// mode never maps again.
pub fn normalize_legacy_pay_modes(dataset: &mut Dataset) -> usize {
    let mut changed = 0usize;
    for refuel in &mut dataset.refuels {
        if let PayMode::Other(label) = &refuel.pay_mode {
            if let Some(mode) = PayMode::from_legacy_label(label) {
                refuel.pay_mode = mode;
                changed += 1;
                continue;
            }
            if label.is_empty() {
                if let Some(mode) = refuel
                    .pay_method
                    .as_deref()
                    .and_then(PayMode::from_legacy_label)
                {
                    refuel.pay_mode = mode;
                    changed += 1;
                }
            }
        }
    }
    if changed > 0 {
        debug!(changed, "legacy pay modes normalized");
    }
    changed
}

#[cfg(test)]
mod tests {
    use frota_types::{Refuel, RefuelId};

    use super::*;

    fn refuel(pay_mode: PayMode, pay_method: Option<&str>) -> Refuel {
        Refuel {
            id: RefuelId::new(),
            date: "2024-03-01".parse().unwrap(),
            time: None,
            plate: "ABC1234".into(),
            driver: String::new(),
            station: "Posto A".into(),
            fuel: String::new(),
            pay_mode,
            pay_method: pay_method.map(Into::into),
            liters: 10.0,
            total: 50.0,
            odometer: 1000.0,
            full_tank: false,
            notes: String::new(),
            price_per_liter: 0.0,
            distance: None,
            consumption: None,
        }
    }

    #[test]
    fn legacy_labels_become_canonical() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel(PayMode::Other("Crédito".into()), None));
        ds.refuels.push(refuel(PayMode::Other("DINHEIRO".into()), None));
        ds.refuels.push(refuel(PayMode::Other("Cartao".into()), None));

        assert_eq!(normalize_legacy_pay_modes(&mut ds), 3);
        assert_eq!(ds.refuels[0].pay_mode, PayMode::Credit);
        assert_eq!(ds.refuels[1].pay_mode, PayMode::Cash);
        assert_eq!(ds.refuels[2].pay_mode, PayMode::Card);
    }

    #[test]
    fn unset_mode_falls_back_to_legacy_pay_method() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel(PayMode::default(), Some("Credito")));

        assert_eq!(normalize_legacy_pay_modes(&mut ds), 1);
        assert_eq!(ds.refuels[0].pay_mode, PayMode::Credit);
    }

    #[test]
    fn unknown_labels_are_left_alone() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel(PayMode::Other("vale-frota".into()), None));

        assert_eq!(normalize_legacy_pay_modes(&mut ds), 0);
        assert_eq!(ds.refuels[0].pay_mode, PayMode::Other("vale-frota".into()));
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel(PayMode::Other("Crédito".into()), None));
        ds.refuels.push(refuel(PayMode::default(), Some("Dinheiro")));

        assert_eq!(normalize_legacy_pay_modes(&mut ds), 2);
        assert_eq!(normalize_legacy_pay_modes(&mut ds), 0);
    }

    #[test]
    fn canonical_modes_are_untouched() {
        let mut ds = Dataset::default();
        ds.refuels.push(refuel(PayMode::Cash, Some("Crédito")));

        assert_eq!(normalize_legacy_pay_modes(&mut ds), 0);
        assert_eq!(ds.refuels[0].pay_mode, PayMode::Cash);
    }
}
