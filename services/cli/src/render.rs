use crate::cli::OutputOptions;
use chrono::NaiveDateTime;
use pocketcalc::calculators::appliance::{ApplianceCatalog, EnergyInput, EnergyResult};
use pocketcalc::calculators::bills::{BillItem, BillsSummary};
use pocketcalc::calculators::charging::{ChargerModel, ChargingEstimate, Connector, PhoneModel};
use pocketcalc::calculators::phone::{PhoneUsageInput, PhoneUsageResult};
use pocketcalc::calculators::rent_vs_buy::{RentVsBuyInput, RentVsBuyResult};
use pocketcalc::calculators::rental_cost::{RentalCostInput, RentalCostResult};
use pocketcalc::config::OutputFormat;
use pocketcalc::error::AppError;
use serde::Serialize;

/// Prints `value` as pretty JSON or hands it to the text renderer.
pub(crate) fn emit<T, F>(output: OutputOptions, value: &T, text: F) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

/// Share text goes to stderr in JSON mode so stdout stays parseable.
pub(crate) fn share(output: OutputOptions, text: &str) {
    match output.format {
        OutputFormat::Json => eprintln!("{text}"),
        OutputFormat::Text => println!("\n--- share ---\n{text}"),
    }
}

#[derive(Serialize)]
pub(crate) struct BillsReport<'a> {
    pub(crate) items: &'a [BillItem],
    pub(crate) summary: &'a BillsSummary,
}

#[derive(Serialize)]
pub(crate) struct ChargingReport<'a> {
    pub(crate) started_at: NaiveDateTime,
    pub(crate) completes_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub(crate) estimate: &'a ChargingEstimate,
}

#[derive(Serialize)]
pub(crate) struct PhoneRow {
    model: PhoneModel,
    label: &'static str,
    battery_mah: f64,
    max_watts: f64,
    connector: Connector,
}

pub(crate) fn phone_rows() -> Vec<PhoneRow> {
    PhoneModel::ordered()
        .into_iter()
        .map(|model| {
            let spec = model.spec();
            PhoneRow {
                model,
                label: model.label(),
                battery_mah: spec.battery_mah,
                max_watts: spec.max_watts,
                connector: spec.connector,
            }
        })
        .collect()
}

#[derive(Serialize)]
pub(crate) struct ChargerRow {
    model: ChargerModel,
    label: &'static str,
    max_watts: f64,
    wireless: bool,
    efficiency: f64,
}

pub(crate) fn charger_rows(chargers: &[ChargerModel]) -> Vec<ChargerRow> {
    chargers
        .iter()
        .map(|&model| {
            let spec = model.spec();
            ChargerRow {
                model,
                label: model.label(),
                max_watts: spec.max_watts,
                wireless: spec.wireless,
                efficiency: spec.efficiency,
            }
        })
        .collect()
}

pub(crate) fn energy(appliance: Option<&str>, input: &EnergyInput, result: &EnergyResult) {
    println!("Appliance energy cost");
    if let Some(name) = appliance {
        println!("Appliance: {name}");
    }
    println!(
        "Inputs: {:.1} W for {:.1} h/day at ${:.3}/kWh",
        input.watts, input.hours_per_day, input.rate
    );
    if input.include_standby {
        println!("Standby: {:.1} W for the remaining hours", input.standby_watts);
    }

    println!(
        "\nDaily usage: {:.3} kWh ({:.3} active, {:.3} standby)",
        result.daily_kwh, result.active_kwh_per_day, result.standby_kwh_per_day
    );
    println!("- Daily:   {:>10.2} kWh  ${:.2}", result.daily_kwh, result.daily_cost);
    println!("- Monthly: {:>10.2} kWh  ${:.2}", result.monthly_kwh, result.monthly_cost);
    println!("- Yearly:  {:>10.2} kWh  ${:.2}", result.yearly_kwh, result.yearly_cost);
}

pub(crate) fn energy_share(input: &EnergyInput, result: &EnergyResult) -> String {
    format!(
        "A {:.0} W appliance running {:.1} h/day uses {:.2} kWh a month and costs ${:.2}/month (${:.2}/year).",
        input.watts, input.hours_per_day, result.monthly_kwh, result.monthly_cost, result.yearly_cost
    )
}

pub(crate) fn phone(result: &PhoneUsageResult) {
    println!("Phone plan cost ({})", result.plan_label);
    println!("- Per minute: ${:.3}", result.cost_per_minute);
    println!("- Per text:   ${:.3}", result.cost_per_text);
    println!("- Per GB:     ${:.2}", result.cost_per_gb);
    println!("- Per day:    ${:.2}", result.daily_cost);
    println!("- Per hour:   ${:.3}", result.hourly_cost);

    println!("\nBill allocation");
    println!("- Voice: ${:.2}", result.allocation.voice);
    println!("- Data:  ${:.2}", result.allocation.data);
    println!("- Text:  ${:.2}", result.allocation.text);

    println!("\nEfficiency: {}", result.tier_label);
}

pub(crate) fn phone_share(input: &PhoneUsageInput, result: &PhoneUsageResult) -> String {
    format!(
        "My ${:.2}/month {} plan works out to ${:.3} per minute, ${:.2} per GB and ${:.3} per text ({}).",
        input.monthly_bill,
        result.plan_label,
        result.cost_per_minute,
        result.cost_per_gb,
        result.cost_per_text,
        result.tier_label
    )
}

pub(crate) fn rent_vs_buy(input: &RentVsBuyInput, result: &RentVsBuyResult, schedule: bool) {
    let buying = &result.buying;
    let renting = &result.renting;

    println!("Rent vs buy over {} years", input.years_to_analyze);

    println!("\nBuying");
    println!(
        "- Loan ${:.2} at {}% for {} months",
        buying.schedule.loan_amount, input.annual_rate_percent, buying.schedule.term_months
    );
    println!("- Mortgage payment: ${:.2}/month", buying.monthly.mortgage);
    println!(
        "- Taxes, insurance, PMI, HOA, maintenance: ${:.2}/month",
        buying.monthly.total - buying.monthly.mortgage
    );
    println!("- Total monthly: ${:.2}", buying.monthly.total);
    println!("- Total cost: ${:.2}", buying.total_cost);
    println!(
        "- Equity: ${:.2} (principal ${:.2}, appreciation ${:.2})",
        buying.equity, buying.principal_paid, buying.appreciation
    );

    println!("\nRenting");
    for year in &renting.years {
        println!(
            "- Year {}: ${:.2}/month rent, ${:.2} for the year",
            year.year, year.monthly_rent, year.yearly_cost
        );
    }
    println!("- Total cost: ${:.2}", renting.total_cost);
    println!("- Average monthly: ${:.2}", renting.average_monthly_cost);
    println!("- Final rent: ${:.2}/month", renting.final_rent);

    if result.break_even.years > 0.0 {
        println!(
            "\nBreak-even: {:.1} years ({:.0} months)",
            result.break_even.years, result.break_even.months
        );
    } else {
        println!("\nBreak-even: immediate (buying is no more expensive per month)");
    }
    println!(
        "Net difference: ${:.2} ({})",
        result.net_difference,
        result.verdict.label()
    );

    if schedule {
        println!("\nAmortization by year");
        for year in &buying.yearly_amortization {
            println!(
                "- Year {}: interest ${:.2}, principal ${:.2}, balance ${:.2}",
                year.year, year.interest, year.principal, year.ending_balance
            );
        }
    }
}

pub(crate) fn rent_vs_buy_share(input: &RentVsBuyInput, result: &RentVsBuyResult) -> String {
    format!(
        "Over {} years buying costs ${:.2} and builds ${:.2} of equity; renting costs ${:.2}. {}.",
        input.years_to_analyze,
        result.buying.total_cost,
        result.buying.equity,
        result.renting.total_cost,
        result.verdict.label()
    )
}

pub(crate) fn renting(input: &RentalCostInput, result: &RentalCostResult) {
    println!("True cost of renting");
    println!("- Monthly: ${:.2}", result.total_monthly_cost);
    println!(
        "- Lease ({} months, incl. deposit): ${:.2}",
        input.lease_months, result.total_lease_cost
    );
    println!("- Daily: ${:.2}", result.daily_cost);

    println!("\nBreakdown");
    for share in &result.breakdown {
        println!(
            "- {}: ${:.2} ({:.1}%)",
            share.label, share.amount, share.percentage
        );
    }

    println!(
        "\nRecommended income: ${:.2}/month (30% rule), ${:.2}/month (25% rule)",
        result.recommended_income, result.conservative_income
    );
}

pub(crate) fn renting_share(input: &RentalCostInput, result: &RentalCostResult) -> String {
    format!(
        "${:.2} rent really costs ${:.2}/month, ${:.2} over a {}-month lease.",
        input.monthly_rent, result.total_monthly_cost, result.total_lease_cost, input.lease_months
    )
}

pub(crate) fn bills(items: &[BillItem], summary: &BillsSummary) {
    println!("Monthly bills");
    for item in items {
        match item.monthly_amount() {
            Some(monthly) => println!(
                "- {} ({}, {}): ${:.2}/month",
                item.name,
                item.category.label(),
                item.frequency.label(),
                monthly
            ),
            None if item.name.trim().is_empty() => {}
            None => println!("- {}: skipped, amount '{}' is not a number", item.name, item.amount),
        }
    }

    println!(
        "\nTotal: ${:.2}/month, ${:.2}/year across {} bills",
        summary.monthly_total, summary.yearly_total, summary.counted_bills
    );

    if !summary.categories.is_empty() {
        println!("\nBy category");
        for category in &summary.categories {
            println!(
                "- {}: ${:.2} ({:.1}%)",
                category.label, category.monthly_total, category.percentage
            );
        }
    }

    println!(
        "\nRecommended income: ${:.2}/month (bills at 50%)",
        summary.recommended_income
    );
}

pub(crate) fn bills_share(summary: &BillsSummary) -> String {
    format!(
        "My {} recurring bills add up to ${:.2} a month (${:.2} a year).",
        summary.counted_bills, summary.monthly_total, summary.yearly_total
    )
}

pub(crate) fn charging(report: &ChargingReport<'_>) {
    let estimate = report.estimate;
    let (hours, minutes) = estimate.hours_and_minutes();

    println!("Charging estimate");
    println!("- Phone: {}", estimate.phone_label);
    println!(
        "- Charger: {} ({:.1} W effective)",
        estimate.charger_label, estimate.effective_watts
    );
    if !estimate.compatible {
        println!("- Warning: this charger is not compatible with the phone");
    }
    println!(
        "- {}% -> {}%: {}h {:02}m ({:.1} minutes)",
        estimate.start_percent, estimate.end_percent, hours, minutes, estimate.minutes
    );
    match report.completes_at {
        Some(done) => println!(
            "- Started {}, done around {}",
            report.started_at.format("%Y-%m-%d %H:%M"),
            done.format("%Y-%m-%d %H:%M")
        ),
        None => println!(
            "- Started {}, completion time out of range",
            report.started_at.format("%Y-%m-%d %H:%M")
        ),
    }

    if !estimate.bands.is_empty() {
        println!("\nTime by battery range");
        for band in &estimate.bands {
            println!("- {}: {:.1} minutes", band.label, band.minutes);
        }
    }
}

pub(crate) fn charging_share(estimate: &ChargingEstimate) -> String {
    let (hours, minutes) = estimate.hours_and_minutes();
    format!(
        "Charging my {} from {}% to {}% with the {} takes about {}h {:02}m.",
        estimate.phone_label,
        estimate.start_percent,
        estimate.end_percent,
        estimate.charger_label,
        hours,
        minutes
    )
}

pub(crate) fn appliances(catalog: &ApplianceCatalog) {
    for category in pocketcalc::calculators::appliance::ApplianceCategory::ordered() {
        let profiles = catalog.in_category(category);
        if profiles.is_empty() {
            continue;
        }
        println!("{}", category.label());
        for profile in profiles {
            match profile.standby_watts {
                Some(standby) => println!(
                    "  {} {}: {:.0} W ({:.1} W standby)",
                    profile.icon, profile.name, profile.typical_watts, standby
                ),
                None => println!(
                    "  {} {}: {:.0} W",
                    profile.icon, profile.name, profile.typical_watts
                ),
            }
        }
    }
}

pub(crate) fn phones(rows: &[PhoneRow]) {
    for row in rows {
        println!(
            "{}: {:.0} mAh, up to {:.0} W, {}",
            row.label,
            row.battery_mah,
            row.max_watts,
            row.connector.label()
        );
    }
}

pub(crate) fn chargers(rows: &[ChargerRow]) {
    for row in rows {
        let kind = if row.wireless { "wireless" } else { "wired" };
        println!(
            "{}: {:.1} W {kind}, {:.0}% efficient",
            row.label,
            row.max_watts,
            row.efficiency * 100.0
        );
    }
}
