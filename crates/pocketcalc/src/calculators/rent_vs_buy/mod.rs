//! Rent-versus-buy comparison over a fixed analysis window.
//!
//! Buying is modelled as an amortizing fixed-rate mortgage plus flat monthly ownership costs,
//! with equity growing through principal repayment and a linear 3% yearly appreciation on the
//! purchase price. Renting escalates once per year. The break-even figure is the simple
//! "down payment divided by the monthly gap" heuristic, not a discounted cash-flow model.

mod mortgage;
mod renting;

pub use mortgage::{
    AmortizationRow, AmortizationYear, MortgageSchedule, MAX_ANNUAL_RATE_PERCENT, MAX_YEARS,
};
pub use renting::{RentYear, RentingResult};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{parse_number, parse_required, InputError};
use mortgage::whole_months;
use renting::analysis_years;

const ANNUAL_APPRECIATION: f64 = 0.03;
const DEFAULT_TERM_YEARS: f64 = 30.0;
const DEFAULT_RENT_INCREASE_PERCENT: f64 = 3.0;
const DEFAULT_YEARS_TO_ANALYZE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyInput {
    pub home_price: f64,
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub property_tax: f64,
    pub home_insurance: f64,
    pub pmi: f64,
    pub hoa: f64,
    pub maintenance: f64,
    pub monthly_rent: f64,
    pub rent_increase_percent: f64,
    pub renters_insurance: f64,
    pub years_to_analyze: f64,
}

impl Default for RentVsBuyInput {
    fn default() -> Self {
        Self {
            home_price: 0.0,
            down_payment: 0.0,
            annual_rate_percent: 0.0,
            term_years: DEFAULT_TERM_YEARS,
            property_tax: 0.0,
            home_insurance: 0.0,
            pmi: 0.0,
            hoa: 0.0,
            maintenance: 0.0,
            monthly_rent: 0.0,
            rent_increase_percent: DEFAULT_RENT_INCREASE_PERCENT,
            renters_insurance: 0.0,
            years_to_analyze: DEFAULT_YEARS_TO_ANALYZE,
        }
    }
}

impl RentVsBuyInput {
    pub fn example() -> Self {
        Self {
            home_price: 400_000.0,
            down_payment: 80_000.0,
            annual_rate_percent: 6.5,
            term_years: 30.0,
            property_tax: 350.0,
            home_insurance: 120.0,
            pmi: 0.0,
            hoa: 50.0,
            maintenance: 200.0,
            monthly_rent: 2200.0,
            rent_increase_percent: 3.0,
            renters_insurance: 20.0,
            years_to_analyze: 5.0,
        }
    }
}

/// Raw text fields as typed into the comparison form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentVsBuyForm {
    pub home_price: String,
    pub down_payment: String,
    pub annual_rate_percent: String,
    pub term_years: String,
    pub property_tax: String,
    pub home_insurance: String,
    pub pmi: String,
    pub hoa: String,
    pub maintenance: String,
    pub monthly_rent: String,
    pub rent_increase_percent: String,
    pub renters_insurance: String,
    pub years_to_analyze: String,
}

impl RentVsBuyForm {
    /// Checks the fields the comparison cannot run without.
    pub fn validate(&self) -> Result<(), InputError> {
        parse_required("home price", &self.home_price)?;
        parse_required("down payment", &self.down_payment)?;
        parse_required("mortgage rate", &self.annual_rate_percent)?;
        parse_required("monthly rent", &self.monthly_rent)?;
        parse_required("years to analyze", &self.years_to_analyze)?;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Lenient conversion: blank optional fields take their defaults, garbage becomes zero.
    pub fn to_input(&self) -> RentVsBuyInput {
        let defaults = RentVsBuyInput::default();
        RentVsBuyInput {
            home_price: parse_number(&self.home_price, 0.0),
            down_payment: parse_number(&self.down_payment, 0.0),
            annual_rate_percent: parse_number(&self.annual_rate_percent, 0.0),
            term_years: parse_number(&self.term_years, defaults.term_years),
            property_tax: parse_number(&self.property_tax, 0.0),
            home_insurance: parse_number(&self.home_insurance, 0.0),
            pmi: parse_number(&self.pmi, 0.0),
            hoa: parse_number(&self.hoa, 0.0),
            maintenance: parse_number(&self.maintenance, 0.0),
            monthly_rent: parse_number(&self.monthly_rent, 0.0),
            rent_increase_percent: parse_number(
                &self.rent_increase_percent,
                defaults.rent_increase_percent,
            ),
            renters_insurance: parse_number(&self.renters_insurance, 0.0),
            years_to_analyze: parse_number(&self.years_to_analyze, defaults.years_to_analyze),
        }
    }

    /// Runs the comparison only once the required fields are filled in.
    pub fn calculate(&self) -> Option<RentVsBuyResult> {
        if self.is_complete() {
            Some(calculate(&self.to_input()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MonthlyOwnershipCost {
    pub mortgage: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub pmi: f64,
    pub hoa: f64,
    pub maintenance: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyingResult {
    pub schedule: MortgageSchedule,
    pub monthly: MonthlyOwnershipCost,
    pub total_cost: f64,
    pub principal_paid: f64,
    pub appreciation: f64,
    pub equity: f64,
    pub yearly_amortization: Vec<AmortizationYear>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEvenPoint {
    pub months: f64,
    pub years: f64,
}

impl BreakEvenPoint {
    pub const IMMEDIATE: Self = Self {
        months: 0.0,
        years: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    BuyingCheaper,
    RentingCheaper,
    Even,
}

impl Verdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuyingCheaper => "Buying costs less over the period",
            Self::RentingCheaper => "Renting costs less over the period",
            Self::Even => "Buying and renting cost the same",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentVsBuyResult {
    pub buying: BuyingResult,
    pub renting: RentingResult,
    pub break_even: BreakEvenPoint,
    /// Buying cost net of equity, minus renting cost. Negative favours buying.
    pub net_difference: f64,
    pub verdict: Verdict,
}

pub fn calculate(input: &RentVsBuyInput) -> RentVsBuyResult {
    let buying = project_buying(input);
    let renting = renting::project(
        input.monthly_rent,
        input.rent_increase_percent,
        input.renters_insurance,
        input.years_to_analyze,
    );
    let break_even = break_even(input.down_payment, buying.monthly.total, input.monthly_rent);

    let net_difference = (buying.total_cost - buying.equity) - renting.total_cost;
    let verdict = if net_difference < 0.0 {
        Verdict::BuyingCheaper
    } else if net_difference > 0.0 {
        Verdict::RentingCheaper
    } else {
        Verdict::Even
    };

    debug!(
        buying_monthly = buying.monthly.total,
        renting_total = renting.total_cost,
        break_even_years = break_even.years,
        "computed rent vs buy comparison"
    );

    RentVsBuyResult {
        buying,
        renting,
        break_even,
        net_difference,
        verdict,
    }
}

/// Years for the monthly saving of renting to add up to the down payment. Zero when buying
/// is already no more expensive per month.
pub fn break_even(down_payment: f64, buying_monthly: f64, renting_monthly: f64) -> BreakEvenPoint {
    if buying_monthly <= renting_monthly {
        return BreakEvenPoint::IMMEDIATE;
    }

    let months = down_payment.max(0.0) / (buying_monthly - renting_monthly);
    BreakEvenPoint {
        months,
        years: months / 12.0,
    }
}

fn project_buying(input: &RentVsBuyInput) -> BuyingResult {
    let home_price = input.home_price.max(0.0);
    let down_payment = input.down_payment.max(0.0);
    let years = analysis_years(input.years_to_analyze);

    let schedule = MortgageSchedule::new(
        home_price - down_payment,
        input.annual_rate_percent,
        input.term_years,
    );

    let monthly = MonthlyOwnershipCost {
        mortgage: schedule.monthly_payment,
        property_tax: input.property_tax,
        insurance: input.home_insurance,
        pmi: input.pmi,
        hoa: input.hoa,
        maintenance: input.maintenance,
        total: schedule.monthly_payment
            + input.property_tax
            + input.home_insurance
            + input.pmi
            + input.hoa
            + input.maintenance,
    };

    let window_months = whole_months(years);
    let principal_paid = schedule.principal_paid(window_months);
    let appreciation = home_price * ANNUAL_APPRECIATION * years;

    BuyingResult {
        total_cost: monthly.total * years * 12.0,
        equity: down_payment + principal_paid + appreciation,
        yearly_amortization: schedule.yearly(window_months),
        principal_paid,
        appreciation,
        monthly,
        schedule,
    }
}
