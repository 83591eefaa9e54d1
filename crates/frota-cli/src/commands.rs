use anyhow::Context;
use colored::Colorize;

use frota_engine::recalc_all;
use frota_import::{import_candidates, CandidateRefuel};
use frota_ledger::{audit_stations, delete_refuel, resolve_station, save_refuel, top_up, MovementOutcome, SaveOutcome};
use frota_recon::{normalize_legacy_pay_modes, reconcile_station_credits};
use frota_store::{JsonFileStore, SnapshotStore};
use frota_types::{Dataset, PayMode, Refuel, RefuelId};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&cli.data);
    match cli.command {
        Command::Init(args) => cmd_init(&store, args),
        Command::AddRefuel(args) => cmd_add_refuel(&store, args),
        Command::DeleteRefuel(args) => cmd_delete_refuel(&store, args),
        Command::TopUp(args) => cmd_top_up(&store, args),
        Command::Import(args) => cmd_import(&store, args),
        Command::Recalc(_) => cmd_recalc(&store),
        Command::Reconcile(_) => cmd_reconcile(&store),
        Command::Stations(_) => cmd_stations(&store),
        Command::Movements(args) => cmd_movements(&store, args),
        Command::Audit(_) => cmd_audit(&store),
    }
}

/// Load the snapshot and run the startup reconciliation passes, persisting
/// only when they changed something.
fn open(store: &JsonFileStore) -> anyhow::Result<Dataset> {
    let mut dataset = store.load();
    let normalized = normalize_legacy_pay_modes(&mut dataset);
    let backfilled = reconcile_station_credits(&mut dataset);
    if normalized + backfilled > 0 {
        println!(
            "{} reconciled on load: {} pay modes normalized, {} debits backfilled",
            "•".cyan(),
            normalized,
            backfilled
        );
        store.save(&mut dataset)?;
    }
    Ok(dataset)
}

fn cmd_init(store: &JsonFileStore, args: InitArgs) -> anyhow::Result<()> {
    if store.path().exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            store.path().display()
        );
    }
    let mut dataset = Dataset::seeded();
    store.save(&mut dataset)?;
    println!(
        "{} Initialized snapshot at {}",
        "✓".green().bold(),
        store.path().display().to_string().bold()
    );
    Ok(())
}

fn cmd_add_refuel(store: &JsonFileStore, args: AddRefuelArgs) -> anyhow::Result<()> {
    let mut dataset = open(store)?;

    let refuel = Refuel {
        id: args.id.unwrap_or_else(RefuelId::new),
        date: args.date,
        time: args.time,
        plate: args.plate.trim().to_uppercase(),
        driver: args.driver,
        station: args.station,
        fuel: args.fuel,
        pay_mode: PayMode::from_legacy_label(&args.pay)
            .unwrap_or_else(|| PayMode::Other(args.pay.clone())),
        pay_method: None,
        liters: args.liters,
        total: args.total,
        odometer: args.odometer,
        full_tank: args.full_tank,
        notes: args.notes,
        price_per_liter: 0.0,
        distance: None,
        consumption: None,
    };

    let outcome = match save_refuel(&mut dataset, refuel) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };
    store.save(&mut dataset)?;
    print_save_outcome(&outcome);
    Ok(())
}

fn print_save_outcome(outcome: &SaveOutcome) {
    let verb = if outcome.created { "saved" } else { "updated" };
    println!("{} Refuel {} ({})", "✓".green().bold(), verb, outcome.id.short_id().yellow());
    println!("  price/L: {:.3}", outcome.derived.price_per_liter);
    match outcome.derived.distance {
        Some(d) => println!("  distance: {d:.1} km"),
        None => println!("  distance: {}", "unknown (first record)".dimmed()),
    }
    if let Some(c) = outcome.derived.consumption {
        println!("  consumption: {c:.2} km/L");
    }
    if let Some(MovementOutcome::Skipped { station_ref }) = &outcome.debit {
        println!(
            "  {} station {:?} not found; credit debit skipped",
            "!".yellow().bold(),
            station_ref
        );
    }
    if let Some(balance) = outcome.negative_balance {
        println!(
            "  {} station credit went negative ({balance:.2}); register a top-up",
            "!".yellow().bold()
        );
    }
}

fn cmd_delete_refuel(store: &JsonFileStore, args: DeleteRefuelArgs) -> anyhow::Result<()> {
    let mut dataset = open(store)?;
    if delete_refuel(&mut dataset, args.id) {
        store.save(&mut dataset)?;
        println!("{} Refuel {} deleted", "✓".green().bold(), args.id.short_id().yellow());
    } else {
        println!("{} No refuel with id {}", "✗".red().bold(), args.id);
    }
    Ok(())
}

fn cmd_top_up(store: &JsonFileStore, args: TopUpArgs) -> anyhow::Result<()> {
    let mut dataset = open(store)?;
    match top_up(&mut dataset, &args.station, args.amount, &args.note)? {
        MovementOutcome::Applied { station_name, balance, .. } => {
            store.save(&mut dataset)?;
            println!(
                "{} {} credited {:.2}, balance {:.2}",
                "✓".green().bold(),
                station_name.bold(),
                args.amount,
                balance
            );
        }
        MovementOutcome::Skipped { station_ref } => {
            println!("{} station {:?} not found", "✗".red().bold(), station_ref);
        }
    }
    Ok(())
}

fn cmd_import(store: &JsonFileStore, args: ImportArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let candidates: Vec<CandidateRefuel> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", args.file.display()))?;

    let mut dataset = open(store)?;
    let report = import_candidates(&mut dataset, &candidates);
    // Imported credit refuels get their debits through the same backfill
    // pass that settles legacy data.
    let backfilled = reconcile_station_credits(&mut dataset);
    store.save(&mut dataset)?;

    println!(
        "{} Imported {} of {} records ({} debits posted)",
        "✓".green().bold(),
        report.added.to_string().bold(),
        candidates.len(),
        backfilled
    );
    for issue in &report.errors {
        println!(
            "  {} record {}: {}",
            "✗".red(),
            issue.index + 1,
            issue.error
        );
    }
    Ok(())
}

fn cmd_recalc(store: &JsonFileStore) -> anyhow::Result<()> {
    let mut dataset = open(store)?;
    recalc_all(&mut dataset);
    store.save(&mut dataset)?;
    println!(
        "{} Recalculated {} refuels",
        "✓".green().bold(),
        dataset.refuels.len()
    );
    Ok(())
}

fn cmd_reconcile(store: &JsonFileStore) -> anyhow::Result<()> {
    let mut dataset = store.load();
    let normalized = normalize_legacy_pay_modes(&mut dataset);
    let backfilled = reconcile_station_credits(&mut dataset);
    if normalized + backfilled > 0 {
        store.save(&mut dataset)?;
    }
    println!(
        "{} {} pay modes normalized, {} missing debits posted",
        "✓".green().bold(),
        normalized,
        backfilled
    );
    Ok(())
}

fn cmd_stations(store: &JsonFileStore) -> anyhow::Result<()> {
    let dataset = open(store)?;
    if dataset.stations.is_empty() {
        println!("No stations.");
        return Ok(());
    }
    for station in &dataset.stations {
        let balance = format!("{:.2}", station.credit);
        let balance = if station.credit < 0.0 {
            balance.red()
        } else {
            balance.green()
        };
        println!("{}  {}  {}", station.id.short_id().dimmed(), station.name.bold(), balance);
    }
    Ok(())
}

fn cmd_movements(store: &JsonFileStore, args: MovementsArgs) -> anyhow::Result<()> {
    let dataset = open(store)?;

    let station_id = match &args.station {
        Some(reference) => match resolve_station(&dataset, reference) {
            Some(i) => Some(dataset.stations[i].id),
            None => {
                println!("{} station {:?} not found", "✗".red().bold(), reference);
                return Ok(());
            }
        },
        None => None,
    };

    let mut shown = 0usize;
    for mv in &dataset.credit_movements {
        if station_id.is_some_and(|id| id != mv.station_id) {
            continue;
        }
        let delta = format!("{:+.2}", mv.delta);
        let delta = if mv.delta < 0.0 { delta.red() } else { delta.green() };
        let correlation = mv
            .refuel_id
            .map(|id| format!("refuel {}", id.short_id()))
            .or_else(|| mv.note.clone())
            .unwrap_or_default();
        println!(
            "{}  {}  {:14}  {}  {}",
            mv.ts.format("%Y-%m-%d %H:%M:%S"),
            mv.id.short_id().dimmed(),
            mv.tag.to_string().cyan(),
            delta,
            correlation.dimmed()
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No movements.");
    }
    Ok(())
}

fn cmd_audit(store: &JsonFileStore) -> anyhow::Result<()> {
    let dataset = open(store)?;
    let mut clean = true;
    for report in audit_stations(&dataset) {
        if report.in_sync() {
            println!(
                "{} {}: balance {:.2} matches {} movements",
                "✓".green(),
                report.station_name.bold(),
                report.balance,
                report.movement_count
            );
        } else {
            clean = false;
            println!(
                "{} {}: balance {:.2} vs movement sum {:.2} (drift {:+.2})",
                "✗".red().bold(),
                report.station_name.bold(),
                report.balance,
                report.movement_sum,
                report.drift()
            );
        }
    }
    if !clean {
        std::process::exit(1);
    }
    Ok(())
}
