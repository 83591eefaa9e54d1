use tracing::{debug, info};

use frota_engine::{compute_derived, recalc_all};
use frota_types::{Dataset, Driver, Fuel, PayMode, Refuel, RefuelId, Station, Vehicle};

use crate::candidate::CandidateRefuel;
use crate::error::ImportError;

/// One rejected candidate: its zero-based position in the batch plus why.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportIssue {
    pub index: usize,
    pub error: ImportError,
}

/// Outcome of a bulk import.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    pub added: usize,
    pub errors: Vec<ImportIssue>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ingest a batch of pre-parsed candidates.
///
/// Each candidate is validated and derived exactly like manual entry;
/// failures are recorded per candidate and the batch continues. Accepted
/// candidates see the records accepted before them, so an in-file sequence
/// derives consecutively. Unknown vehicles/drivers/stations/fuels are
/// registered on first reference. Rejected candidates leave no trace; in
/// particular no ledger movement is ever posted for them (credit-mode
/// imports are settled by the reconciliation pass, not here).
///
/// Ends with one full recomputation so records imported out of temporal
/// order still derive consistently.
pub fn import_candidates(dataset: &mut Dataset, candidates: &[CandidateRefuel]) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, candidate) in candidates.iter().enumerate() {
        match ingest_one(dataset, candidate) {
            Ok(id) => {
                debug!(index, %id, "candidate accepted");
                report.added += 1;
            }
            Err(error) => {
                debug!(index, %error, "candidate rejected");
                report.errors.push(ImportIssue { index, error });
            }
        }
    }

    recalc_all(dataset);
    info!(
        added = report.added,
        rejected = report.errors.len(),
        "bulk import finished"
    );
    report
}

fn ingest_one(dataset: &mut Dataset, candidate: &CandidateRefuel) -> Result<RefuelId, ImportError> {
    if candidate.plate.trim().is_empty() {
        return Err(ImportError::EmptyPlate);
    }
    if candidate.driver.trim().is_empty() {
        return Err(ImportError::EmptyDriver);
    }
    if candidate.liters <= 0.0 {
        return Err(ImportError::InvalidLiters(candidate.liters));
    }
    if candidate.total <= 0.0 {
        return Err(ImportError::InvalidTotal(candidate.total));
    }
    if candidate.odometer < 0.0 {
        return Err(ImportError::InvalidOdometer(candidate.odometer));
    }

    let plate = ensure_vehicle(dataset, &candidate.plate);
    let driver = ensure_driver(dataset, &candidate.driver);
    let station = ensure_station(dataset, &candidate.station);
    let fuel = ensure_fuel(dataset, &candidate.fuel);

    let pay_mode = candidate
        .pay_mode
        .as_deref()
        .map(|label| {
            PayMode::from_legacy_label(label)
                .unwrap_or_else(|| PayMode::Other(label.trim().to_string()))
        })
        .unwrap_or_default();

    let refuel = Refuel {
        id: RefuelId::new(),
        date: candidate.date,
        time: candidate.time,
        plate,
        driver,
        station,
        fuel,
        pay_mode,
        pay_method: None,
        liters: candidate.liters,
        total: candidate.total,
        odometer: candidate.odometer,
        full_tank: candidate.full_tank,
        notes: candidate.notes.trim().to_string(),
        price_per_liter: 0.0,
        distance: None,
        consumption: None,
    };

    // Same write-time gate as manual entry; a regression rejects just this
    // candidate.
    let derived = compute_derived(dataset, &refuel)?;
    let mut record = refuel;
    derived.apply_to(&mut record);
    let id = record.id;
    dataset.refuels.push(record);
    Ok(id)
}

/// Existing vehicle's plate for a case-insensitive match, registering the
/// vehicle otherwise.
fn ensure_vehicle(dataset: &mut Dataset, plate: &str) -> String {
    let needle = plate.trim().to_uppercase();
    if let Some(v) = dataset
        .vehicles
        .iter()
        .find(|v| v.plate.to_uppercase() == needle)
    {
        return v.plate.clone();
    }
    let vehicle = Vehicle::new(needle, "");
    let plate = vehicle.plate.clone();
    dataset.vehicles.push(vehicle);
    plate
}

fn ensure_driver(dataset: &mut Dataset, name: &str) -> String {
    ensure_named(&mut dataset.drivers, name, |n| Driver::new(n), |d| &d.name)
}

fn ensure_station(dataset: &mut Dataset, name: &str) -> String {
    ensure_named(&mut dataset.stations, name, |n| Station::new(n), |s| &s.name)
}

fn ensure_fuel(dataset: &mut Dataset, name: &str) -> String {
    ensure_named(&mut dataset.fuels, name, |n| Fuel::new(n), |f| &f.name)
}

fn ensure_named<T>(
    list: &mut Vec<T>,
    name: &str,
    make: impl FnOnce(String) -> T,
    get: impl Fn(&T) -> &String,
) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if let Some(existing) = list.iter().find(|e| get(e).to_lowercase() == lower) {
        return get(existing).clone();
    }
    let entity = make(trimmed.to_string());
    let name = get(&entity).clone();
    list.push(entity);
    name
}
