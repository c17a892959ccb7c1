use crate::commands::{
    run_bills, run_catalog, run_charging, run_energy, run_phone, run_rent_vs_buy, run_renting,
    BillsArgs, CatalogCommand, ChargingArgs, EnergyArgs, PhoneArgs, RentVsBuyArgs, RentingArgs,
};
use clap::{Parser, Subcommand};
use pocketcalc::config::{AppConfig, OutputFormat};
use pocketcalc::error::AppError;
use pocketcalc::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "pocketcalc",
    about = "Everyday money and utility calculators from the command line",
    version
)]
struct Cli {
    /// Print results as JSON regardless of POCKETCALC_OUTPUT
    #[arg(long, global = true)]
    json: bool,
    /// Append a plain-text summary suitable for sharing
    #[arg(long, global = true)]
    share: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Energy use and running cost of an appliance
    Energy(EnergyArgs),
    /// Cost per minute, text and GB of a phone plan
    Phone(PhoneArgs),
    /// Compare buying a home with renting over a number of years
    RentVsBuy(RentVsBuyArgs),
    /// True monthly and lease cost of renting
    Renting(RentingArgs),
    /// Aggregate recurring bills into a monthly budget
    Bills(BillsArgs),
    /// Estimate iPhone charging time
    Charging(ChargingArgs),
    /// List built-in reference data
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Energy(_) => "energy",
            Command::Phone(_) => "phone",
            Command::RentVsBuy(_) => "rent-vs-buy",
            Command::Renting(_) => "renting",
            Command::Bills(_) => "bills",
            Command::Charging(_) => "charging",
            Command::Catalog { .. } => "catalog",
        }
    }
}

/// Output settings resolved from config and global flags.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputOptions {
    pub(crate) format: OutputFormat,
    pub(crate) share: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if cli.json {
        config.output = OutputFormat::Json;
    }

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, command = cli.command.name(), "running calculator");

    let output = OutputOptions {
        format: config.output,
        share: cli.share,
    };

    match cli.command {
        Command::Energy(args) => run_energy(args, &config, output),
        Command::Phone(args) => run_phone(args, output),
        Command::RentVsBuy(args) => run_rent_vs_buy(args, output),
        Command::Renting(args) => run_renting(args, output),
        Command::Bills(args) => run_bills(args, output),
        Command::Charging(args) => run_charging(args, output),
        Command::Catalog { command } => run_catalog(command, output),
    }
}
