//! Appliance energy use and running cost.

mod catalog;

pub use catalog::{ApplianceCatalog, ApplianceCategory, ApplianceProfile};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::positive_or_zero;

const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyInput {
    pub watts: f64,
    pub hours_per_day: f64,
    /// Electricity price in $/kWh.
    pub rate: f64,
    pub standby_watts: f64,
    pub include_standby: bool,
}

impl EnergyInput {
    pub fn example() -> Self {
        Self {
            watts: 100.0,
            hours_per_day: 5.0,
            rate: 0.15,
            standby_watts: 1.0,
            include_standby: true,
        }
    }

    /// Copies a catalog entry into the wattage fields. Later edits do not touch the profile.
    pub fn apply_profile(&mut self, profile: &ApplianceProfile) {
        self.watts = profile.typical_watts;
        self.standby_watts = profile.standby_watts.unwrap_or(0.0);
        self.include_standby = profile.standby_watts.is_some();
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EnergyResult {
    pub active_kwh_per_day: f64,
    pub standby_kwh_per_day: f64,
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub yearly_kwh: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub yearly_cost: f64,
}

pub fn calculate(input: &EnergyInput) -> EnergyResult {
    let hours = input.hours_per_day;
    let hours_in_range = hours > 0.0 && hours <= HOURS_PER_DAY;
    let watts = positive_or_zero(input.watts);

    let active_kwh_per_day = if watts > 0.0 && hours_in_range {
        watts * hours / 1000.0
    } else {
        0.0
    };

    let standby_kwh_per_day = if input.include_standby
        && input.standby_watts > 0.0
        && (0.0..HOURS_PER_DAY).contains(&hours)
    {
        input.standby_watts * (HOURS_PER_DAY - hours) / 1000.0
    } else {
        0.0
    };

    let daily_kwh = active_kwh_per_day + standby_kwh_per_day;
    let daily_cost = daily_kwh * positive_or_zero(input.rate);

    let result = EnergyResult {
        active_kwh_per_day,
        standby_kwh_per_day,
        daily_kwh,
        monthly_kwh: daily_kwh * DAYS_PER_MONTH,
        yearly_kwh: daily_kwh * DAYS_PER_YEAR,
        daily_cost,
        monthly_cost: daily_cost * DAYS_PER_MONTH,
        yearly_cost: daily_cost * DAYS_PER_YEAR,
    };

    debug!(
        daily_kwh = result.daily_kwh,
        yearly_cost = result.yearly_cost,
        "computed appliance energy use"
    );
    result
}
