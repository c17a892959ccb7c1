//! True monthly cost of a lease and the income it calls for.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::percent_of;

const DAYS_PER_MONTH: f64 = 30.0;
const RECOMMENDED_RENT_RATIO: f64 = 0.30;
const CONSERVATIVE_RENT_RATIO: f64 = 0.25;
const DEFAULT_LEASE_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalCostInput {
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub utilities: f64,
    pub parking: f64,
    pub insurance: f64,
    pub other_fees: f64,
    pub lease_months: f64,
}

impl Default for RentalCostInput {
    fn default() -> Self {
        Self {
            monthly_rent: 0.0,
            security_deposit: 0.0,
            utilities: 0.0,
            parking: 0.0,
            insurance: 0.0,
            other_fees: 0.0,
            lease_months: DEFAULT_LEASE_MONTHS,
        }
    }
}

impl RentalCostInput {
    pub fn example() -> Self {
        Self {
            monthly_rent: 1500.0,
            security_deposit: 1500.0,
            utilities: 150.0,
            parking: 50.0,
            insurance: 25.0,
            other_fees: 30.0,
            lease_months: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalCostCategory {
    Rent,
    Utilities,
    Parking,
    Insurance,
    OtherFees,
}

impl RentalCostCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Parking => "Parking",
            Self::Insurance => "Insurance",
            Self::OtherFees => "Other Fees",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostShare {
    pub category: RentalCostCategory,
    pub label: &'static str,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalCostResult {
    pub total_monthly_cost: f64,
    pub total_lease_cost: f64,
    pub daily_cost: f64,
    pub breakdown: Vec<CostShare>,
    pub recommended_income: f64,
    pub conservative_income: f64,
}

pub fn calculate(input: &RentalCostInput) -> RentalCostResult {
    let components = [
        (RentalCostCategory::Rent, input.monthly_rent),
        (RentalCostCategory::Utilities, input.utilities),
        (RentalCostCategory::Parking, input.parking),
        (RentalCostCategory::Insurance, input.insurance),
        (RentalCostCategory::OtherFees, input.other_fees),
    ];

    let total_monthly_cost: f64 = components.iter().map(|(_, amount)| amount).sum();
    let lease_months = input.lease_months.max(0.0);

    let breakdown = components
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .map(|(category, amount)| CostShare {
            category,
            label: category.label(),
            amount,
            percentage: percent_of(amount, total_monthly_cost),
        })
        .collect();

    let result = RentalCostResult {
        total_monthly_cost,
        total_lease_cost: total_monthly_cost * lease_months + input.security_deposit,
        daily_cost: total_monthly_cost / DAYS_PER_MONTH,
        breakdown,
        recommended_income: total_monthly_cost / RECOMMENDED_RENT_RATIO,
        conservative_income: total_monthly_cost / CONSERVATIVE_RENT_RATIO,
    };

    debug!(
        total_monthly_cost = result.total_monthly_cost,
        total_lease_cost = result.total_lease_cost,
        "computed rental cost"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_is_excluded_from_monthly_total() {
        let result = calculate(&RentalCostInput {
            monthly_rent: 1000.0,
            security_deposit: 2000.0,
            lease_months: 6.0,
            ..RentalCostInput::default()
        });
        assert_eq!(result.total_monthly_cost, 1000.0);
        assert_eq!(result.total_lease_cost, 8000.0);
    }

    #[test]
    fn breakdown_skips_empty_categories() {
        let result = calculate(&RentalCostInput {
            monthly_rent: 900.0,
            parking: 100.0,
            ..RentalCostInput::default()
        });
        let labels: Vec<_> = result.breakdown.iter().map(|share| share.label).collect();
        assert_eq!(labels, vec!["Rent", "Parking"]);
        assert!((result.breakdown[0].percentage - 90.0).abs() < 1e-9);
        assert!((result.breakdown[1].percentage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn income_guidelines_follow_rent_ratios() {
        let result = calculate(&RentalCostInput {
            monthly_rent: 1500.0,
            ..RentalCostInput::default()
        });
        assert!((result.recommended_income - 5000.0).abs() < 1e-9);
        assert!((result.conservative_income - 6000.0).abs() < 1e-9);
        assert!((result.daily_cost - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let result = calculate(&RentalCostInput::default());
        assert_eq!(result.total_monthly_cost, 0.0);
        assert_eq!(result.total_lease_cost, 0.0);
        assert!(result.breakdown.is_empty());
        assert_eq!(result.recommended_income, 0.0);
    }
}
