use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use frota_types::RefuelId;

#[derive(Parser)]
#[command(
    name = "frota",
    about = "Frota offline fleet-fuel tracker",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Snapshot file.
    #[arg(long, global = true, default_value = "frota.json")]
    pub data: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a fresh seeded snapshot
    Init(InitArgs),
    /// Record or edit a refuel
    AddRefuel(AddRefuelArgs),
    /// Delete a refuel by id
    DeleteRefuel(DeleteRefuelArgs),
    /// Add prepaid credit to a station
    TopUp(TopUpArgs),
    /// Import a JSON array of refuel candidates
    Import(ImportArgs),
    /// Recompute every derived field
    Recalc(RecalcArgs),
    /// Run the reconciliation passes
    Reconcile(ReconcileArgs),
    /// List stations and their credit balances
    Stations(StationsArgs),
    /// Show credit movements, optionally for one station
    Movements(MovementsArgs),
    /// Check every station balance against its movement history
    Audit(AuditArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing snapshot.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddRefuelArgs {
    pub plate: String,
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long)]
    pub time: Option<NaiveTime>,
    #[arg(long)]
    pub liters: f64,
    #[arg(long)]
    pub total: f64,
    #[arg(long)]
    pub odometer: f64,
    #[arg(long, default_value = "")]
    pub driver: String,
    #[arg(long, default_value = "")]
    pub station: String,
    #[arg(long, default_value = "")]
    pub fuel: String,
    /// cash, card, credit, or a legacy label.
    #[arg(long, default_value = "cash")]
    pub pay: String,
    #[arg(long)]
    pub full_tank: bool,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// Edit the refuel with this id instead of creating a new one.
    #[arg(long)]
    pub id: Option<RefuelId>,
}

#[derive(Args)]
pub struct DeleteRefuelArgs {
    pub id: RefuelId,
}

#[derive(Args)]
pub struct TopUpArgs {
    pub station: String,
    pub amount: f64,
    #[arg(long, default_value = "")]
    pub note: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file holding an array of candidates.
    pub file: PathBuf,
}

#[derive(Args)]
pub struct RecalcArgs {}

#[derive(Args)]
pub struct ReconcileArgs {}

#[derive(Args)]
pub struct StationsArgs {}

#[derive(Args)]
pub struct MovementsArgs {
    /// Station id or name.
    pub station: Option<String>,
}

#[derive(Args)]
pub struct AuditArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["frota", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init(_)));
    }

    #[test]
    fn parse_global_data_path() {
        let cli = Cli::try_parse_from(["frota", "--data", "/tmp/x.json", "stations"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn parse_add_refuel() {
        let cli = Cli::try_parse_from([
            "frota",
            "add-refuel",
            "ABC1234",
            "--date",
            "2024-03-01",
            "--liters",
            "40",
            "--total",
            "220",
            "--odometer",
            "12000",
            "--station",
            "Posto A",
            "--pay",
            "credit",
            "--full-tank",
        ])
        .unwrap();
        if let Command::AddRefuel(args) = cli.command {
            assert_eq!(args.plate, "ABC1234");
            assert_eq!(args.date.to_string(), "2024-03-01");
            assert_eq!(args.pay, "credit");
            assert!(args.full_tank);
            assert!(args.id.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_top_up() {
        let cli = Cli::try_parse_from(["frota", "top-up", "Posto A", "300", "--note", "aporte"])
            .unwrap();
        if let Command::TopUp(args) = cli.command {
            assert_eq!(args.station, "Posto A");
            assert_eq!(args.amount, 300.0);
            assert_eq!(args.note, "aporte");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_delete_refuel_rejects_bad_id() {
        assert!(Cli::try_parse_from(["frota", "delete-refuel", "not-a-uuid"]).is_err());
    }

    #[test]
    fn parse_movements_with_station_filter() {
        let cli = Cli::try_parse_from(["frota", "movements", "Posto A"]).unwrap();
        if let Command::Movements(args) = cli.command {
            assert_eq!(args.station.as_deref(), Some("Posto A"));
        } else {
            panic!("wrong command");
        }
    }
}
