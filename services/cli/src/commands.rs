use crate::cli::OutputOptions;
use crate::infra::{
    parse_bill, parse_charger, parse_datetime, parse_percent, parse_phone, parse_plan, parse_step,
};
use crate::render;
use chrono::{Local, NaiveDateTime};
use clap::{Args, Subcommand};
use pocketcalc::calculators::appliance::{self, ApplianceCatalog, EnergyInput};
use pocketcalc::calculators::bills::{self, BillItem, BillList};
use pocketcalc::calculators::charging::{
    self, ChargerModel, ChargingInput, PhoneModel, DEFAULT_STEP_PERCENT,
};
use pocketcalc::calculators::input::lenient_number;
use pocketcalc::calculators::phone::{self, PhoneUsageInput, PlanType};
use pocketcalc::calculators::rent_vs_buy::{self, RentVsBuyForm, RentVsBuyInput};
use pocketcalc::calculators::rental_cost::{self, RentalCostInput};
use pocketcalc::config::AppConfig;
use pocketcalc::error::AppError;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EnergyArgs {
    /// Start from a catalog appliance (e.g. "LED TV")
    #[arg(long)]
    pub(crate) appliance: Option<String>,
    /// Power draw while running, in watts
    #[arg(long, value_parser = lenient_number)]
    pub(crate) watts: Option<f64>,
    /// Hours of use per day (0-24)
    #[arg(long, value_parser = lenient_number)]
    pub(crate) hours: Option<f64>,
    /// Electricity price in $/kWh (defaults to POCKETCALC_ELECTRICITY_RATE)
    #[arg(long, value_parser = lenient_number)]
    pub(crate) rate: Option<f64>,
    /// Standby draw while idle, in watts
    #[arg(long, value_parser = lenient_number)]
    pub(crate) standby_watts: Option<f64>,
    /// Count standby draw for the idle hours
    #[arg(long)]
    pub(crate) include_standby: bool,
    /// Load example values before applying overrides
    #[arg(long)]
    pub(crate) example: bool,
}

pub(crate) fn run_energy(
    args: EnergyArgs,
    config: &AppConfig,
    output: OutputOptions,
) -> Result<(), AppError> {
    let mut input = if args.example {
        EnergyInput::example()
    } else {
        EnergyInput {
            rate: config.defaults.electricity_rate,
            ..EnergyInput::default()
        }
    };

    let catalog = ApplianceCatalog::standard();
    let profile = match args.appliance.as_deref() {
        Some(name) => {
            let profile = catalog
                .find(name)
                .ok_or_else(|| AppError::UnknownCatalogEntry {
                    kind: "appliance",
                    name: name.to_string(),
                })?;
            input.apply_profile(profile);
            Some(profile)
        }
        None => None,
    };

    if let Some(watts) = args.watts {
        input.watts = watts;
    }
    if let Some(hours) = args.hours {
        input.hours_per_day = hours;
    }
    if let Some(rate) = args.rate {
        input.rate = rate;
    }
    if let Some(standby) = args.standby_watts {
        input.standby_watts = standby;
    }
    if args.include_standby {
        input.include_standby = true;
    }

    let result = appliance::calculate(&input);
    render::emit(output, &result, |result| {
        render::energy(profile.map(|profile| profile.name), &input, result)
    })?;
    if output.share {
        render::share(output, &render::energy_share(&input, &result));
    }
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct PhoneArgs {
    /// Monthly bill in dollars
    #[arg(long, value_parser = lenient_number)]
    pub(crate) bill: Option<f64>,
    /// Voice minutes used per month
    #[arg(long, value_parser = lenient_number)]
    pub(crate) minutes: Option<f64>,
    /// Mobile data used per month, in GB
    #[arg(long, value_parser = lenient_number)]
    pub(crate) data_gb: Option<f64>,
    /// Texts sent per month
    #[arg(long, value_parser = lenient_number)]
    pub(crate) texts: Option<f64>,
    /// Plan type (prepaid, postpaid, family, business)
    #[arg(long, value_parser = parse_plan)]
    pub(crate) plan: Option<PlanType>,
    /// Load example values before applying overrides
    #[arg(long)]
    pub(crate) example: bool,
}

pub(crate) fn run_phone(args: PhoneArgs, output: OutputOptions) -> Result<(), AppError> {
    let mut input = if args.example {
        PhoneUsageInput::example()
    } else {
        PhoneUsageInput::default()
    };

    if let Some(bill) = args.bill {
        input.monthly_bill = bill;
    }
    if let Some(minutes) = args.minutes {
        input.minutes = minutes;
    }
    if let Some(data_gb) = args.data_gb {
        input.data_gb = data_gb;
    }
    if let Some(texts) = args.texts {
        input.texts = texts;
    }
    if let Some(plan) = args.plan {
        input.plan = plan;
    }

    let result = phone::calculate(&input);
    render::emit(output, &result, render::phone)?;
    if output.share {
        render::share(output, &render::phone_share(&input, &result));
    }
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct RentVsBuyArgs {
    /// Purchase price of the home
    #[arg(long, default_value = "")]
    pub(crate) home_price: String,
    /// Down payment
    #[arg(long, default_value = "")]
    pub(crate) down_payment: String,
    /// Annual mortgage rate in percent
    #[arg(long, default_value = "")]
    pub(crate) rate: String,
    /// Mortgage term in years
    #[arg(long, default_value = "30")]
    pub(crate) term_years: String,
    /// Monthly property tax
    #[arg(long, default_value = "")]
    pub(crate) property_tax: String,
    /// Monthly home insurance
    #[arg(long, default_value = "")]
    pub(crate) home_insurance: String,
    /// Monthly private mortgage insurance
    #[arg(long, default_value = "")]
    pub(crate) pmi: String,
    /// Monthly HOA fee
    #[arg(long, default_value = "")]
    pub(crate) hoa: String,
    /// Monthly maintenance budget
    #[arg(long, default_value = "")]
    pub(crate) maintenance: String,
    /// Current monthly rent
    #[arg(long, default_value = "")]
    pub(crate) rent: String,
    /// Annual rent increase in percent
    #[arg(long, default_value = "3")]
    pub(crate) rent_increase: String,
    /// Monthly renters insurance
    #[arg(long, default_value = "")]
    pub(crate) renters_insurance: String,
    /// Years to compare
    #[arg(long, default_value = "5")]
    pub(crate) years: String,
    /// Print the yearly amortization table
    #[arg(long)]
    pub(crate) schedule: bool,
    /// Ignore the other fields and run the built-in example
    #[arg(long)]
    pub(crate) example: bool,
}

impl RentVsBuyArgs {
    fn form(&self) -> RentVsBuyForm {
        RentVsBuyForm {
            home_price: self.home_price.clone(),
            down_payment: self.down_payment.clone(),
            annual_rate_percent: self.rate.clone(),
            term_years: self.term_years.clone(),
            property_tax: self.property_tax.clone(),
            home_insurance: self.home_insurance.clone(),
            pmi: self.pmi.clone(),
            hoa: self.hoa.clone(),
            maintenance: self.maintenance.clone(),
            monthly_rent: self.rent.clone(),
            rent_increase_percent: self.rent_increase.clone(),
            renters_insurance: self.renters_insurance.clone(),
            years_to_analyze: self.years.clone(),
        }
    }
}

pub(crate) fn run_rent_vs_buy(args: RentVsBuyArgs, output: OutputOptions) -> Result<(), AppError> {
    let input = if args.example {
        RentVsBuyInput::example()
    } else {
        let form = args.form();
        form.validate()?;
        form.to_input()
    };

    let result = rent_vs_buy::calculate(&input);
    render::emit(output, &result, |result| {
        render::rent_vs_buy(&input, result, args.schedule)
    })?;
    if output.share {
        render::share(output, &render::rent_vs_buy_share(&input, &result));
    }
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct RentingArgs {
    /// Monthly rent
    #[arg(long, value_parser = lenient_number)]
    pub(crate) rent: Option<f64>,
    /// Security deposit (paid once)
    #[arg(long, value_parser = lenient_number)]
    pub(crate) deposit: Option<f64>,
    /// Monthly utilities
    #[arg(long, value_parser = lenient_number)]
    pub(crate) utilities: Option<f64>,
    /// Monthly parking
    #[arg(long, value_parser = lenient_number)]
    pub(crate) parking: Option<f64>,
    /// Monthly renters insurance
    #[arg(long, value_parser = lenient_number)]
    pub(crate) insurance: Option<f64>,
    /// Other monthly fees
    #[arg(long, value_parser = lenient_number)]
    pub(crate) other_fees: Option<f64>,
    /// Lease length in months
    #[arg(long, value_parser = lenient_number)]
    pub(crate) lease_months: Option<f64>,
    /// Load example values before applying overrides
    #[arg(long)]
    pub(crate) example: bool,
}

pub(crate) fn run_renting(args: RentingArgs, output: OutputOptions) -> Result<(), AppError> {
    let base = if args.example {
        RentalCostInput::example()
    } else {
        RentalCostInput::default()
    };

    let input = RentalCostInput {
        monthly_rent: args.rent.unwrap_or(base.monthly_rent),
        security_deposit: args.deposit.unwrap_or(base.security_deposit),
        utilities: args.utilities.unwrap_or(base.utilities),
        parking: args.parking.unwrap_or(base.parking),
        insurance: args.insurance.unwrap_or(base.insurance),
        other_fees: args.other_fees.unwrap_or(base.other_fees),
        lease_months: args.lease_months.unwrap_or(base.lease_months),
    };

    let result = rental_cost::calculate(&input);
    render::emit(output, &result, |result| render::renting(&input, result))?;
    if output.share {
        render::share(output, &render::renting_share(&input, &result));
    }
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct BillsArgs {
    /// CSV file with a `name,amount,category,frequency` header
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Inline bill as `name,amount[,category[,frequency]]` (repeatable)
    #[arg(long = "bill", value_parser = parse_bill)]
    pub(crate) bills: Vec<BillItem>,
    /// Start from the example bill list
    #[arg(long)]
    pub(crate) example: bool,
}

pub(crate) fn run_bills(args: BillsArgs, output: OutputOptions) -> Result<(), AppError> {
    let base = match (&args.file, args.example) {
        (Some(path), _) => bills::read_csv(File::open(path)?)?,
        (None, true) => BillList::example(),
        (None, false) => BillList::default(),
    };

    let mut items: Vec<BillItem> = base
        .items()
        .iter()
        .filter(|item| **item != BillItem::default())
        .cloned()
        .collect();
    items.extend(args.bills);
    let list = BillList::from_items(items);

    let summary = list.summary();
    render::emit(
        output,
        &render::BillsReport {
            items: list.items(),
            summary: &summary,
        },
        |report| render::bills(report.items, report.summary),
    )?;
    if output.share {
        render::share(output, &render::bills_share(&summary));
    }
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct ChargingArgs {
    /// Phone model, as listed by `pocketcalc catalog phones`
    #[arg(long, value_parser = parse_phone, default_value = "iPhone 15 Pro")]
    pub(crate) phone: PhoneModel,
    /// Charger, as listed by `pocketcalc catalog chargers`
    #[arg(long, value_parser = parse_charger, default_value = "20W USB-C Power Adapter")]
    pub(crate) charger: ChargerModel,
    /// Starting battery percentage
    #[arg(long, value_parser = parse_percent, default_value = "20")]
    pub(crate) start: u8,
    /// Target battery percentage
    #[arg(long, value_parser = parse_percent, default_value = "80")]
    pub(crate) end: u8,
    /// Integration step in percentage points (0.01-100)
    #[arg(long, value_parser = parse_step, default_value_t = DEFAULT_STEP_PERCENT)]
    pub(crate) step: f64,
    /// When charging starts (YYYY-MM-DD HH:MM, defaults to now)
    #[arg(long, value_parser = parse_datetime)]
    pub(crate) started_at: Option<NaiveDateTime>,
}

pub(crate) fn run_charging(args: ChargingArgs, output: OutputOptions) -> Result<(), AppError> {
    let input = ChargingInput {
        phone: args.phone,
        charger: args.charger,
        start_percent: args.start,
        end_percent: args.end,
    };

    let estimate = charging::estimate_with_step(&input, args.step);
    let started_at = args
        .started_at
        .unwrap_or_else(|| Local::now().naive_local());
    let report = render::ChargingReport {
        completes_at: estimate.completes_at(started_at),
        started_at,
        estimate: &estimate,
    };

    render::emit(output, &report, render::charging)?;
    if output.share {
        render::share(output, &render::charging_share(&estimate));
    }
    Ok(())
}

#[derive(Subcommand, Debug)]
pub(crate) enum CatalogCommand {
    /// Appliances with typical and standby wattage
    Appliances,
    /// Supported phone models
    Phones,
    /// Chargers, optionally only those compatible with a phone
    Chargers {
        #[arg(long, value_parser = parse_phone)]
        phone: Option<PhoneModel>,
    },
}

pub(crate) fn run_catalog(command: CatalogCommand, output: OutputOptions) -> Result<(), AppError> {
    match command {
        CatalogCommand::Appliances => {
            let catalog = ApplianceCatalog::standard();
            render::emit(output, &catalog.profiles(), |_| render::appliances(&catalog))
        }
        CatalogCommand::Phones => {
            let phones = render::phone_rows();
            render::emit(output, &phones, |phones| render::phones(phones))
        }
        CatalogCommand::Chargers { phone } => {
            let chargers = match phone {
                Some(phone) => charging::compatible_chargers(phone),
                None => ChargerModel::ordered().to_vec(),
            };
            let rows = render::charger_rows(&chargers);
            render::emit(output, &rows, |rows| render::chargers(rows))
        }
    }
}
