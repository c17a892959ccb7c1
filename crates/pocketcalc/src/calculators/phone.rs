//! Cost per unit of a monthly phone plan.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::ratio_or_zero;

const DAYS_PER_MONTH: f64 = 30.0;
const HOURS_PER_DAY: f64 = 24.0;

const VOICE_SHARE: f64 = 0.40;
const DATA_SHARE: f64 = 0.50;
const TEXT_SHARE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Prepaid,
    #[default]
    Postpaid,
    Family,
    Business,
}

impl PlanType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Prepaid, Self::Postpaid, Self::Family, Self::Business]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prepaid => "Prepaid",
            Self::Postpaid => "Postpaid",
            Self::Family => "Family Plan",
            Self::Business => "Business",
        }
    }
}

/// Rating derived from the cost per minute. Variants are ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    NoUsageData,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl EfficiencyTier {
    pub fn from_cost_per_minute(cost_per_minute: f64) -> Self {
        if cost_per_minute == 0.0 {
            Self::NoUsageData
        } else if cost_per_minute < 0.10 {
            Self::Excellent
        } else if cost_per_minute < 0.25 {
            Self::Good
        } else if cost_per_minute < 0.50 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoUsageData => "No Usage Data",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhoneUsageInput {
    pub monthly_bill: f64,
    pub minutes: f64,
    pub data_gb: f64,
    pub texts: f64,
    pub plan: PlanType,
}

impl PhoneUsageInput {
    pub fn example() -> Self {
        Self {
            monthly_bill: 65.0,
            minutes: 450.0,
            data_gb: 12.0,
            texts: 800.0,
            plan: PlanType::Postpaid,
        }
    }
}

/// Fixed allocation of the bill across services. Not derived from actual usage.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BillAllocation {
    pub voice: f64,
    pub data: f64,
    pub text: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneUsageResult {
    pub plan: PlanType,
    pub plan_label: &'static str,
    pub cost_per_minute: f64,
    pub cost_per_text: f64,
    pub cost_per_gb: f64,
    pub daily_cost: f64,
    pub hourly_cost: f64,
    pub allocation: BillAllocation,
    pub tier: EfficiencyTier,
    pub tier_label: &'static str,
}

pub fn calculate(input: &PhoneUsageInput) -> PhoneUsageResult {
    let bill = input.monthly_bill.max(0.0);
    let cost_per_minute = ratio_or_zero(bill, input.minutes);
    let tier = EfficiencyTier::from_cost_per_minute(cost_per_minute);

    let result = PhoneUsageResult {
        plan: input.plan,
        plan_label: input.plan.label(),
        cost_per_minute,
        cost_per_text: ratio_or_zero(bill, input.texts),
        cost_per_gb: ratio_or_zero(bill, input.data_gb),
        daily_cost: bill / DAYS_PER_MONTH,
        hourly_cost: bill / (DAYS_PER_MONTH * HOURS_PER_DAY),
        allocation: BillAllocation {
            voice: bill * VOICE_SHARE,
            data: bill * DATA_SHARE,
            text: bill * TEXT_SHARE,
        },
        tier,
        tier_label: tier.label(),
    };

    debug!(
        cost_per_minute = result.cost_per_minute,
        tier = result.tier_label,
        "computed phone plan costs"
    );
    result
}
