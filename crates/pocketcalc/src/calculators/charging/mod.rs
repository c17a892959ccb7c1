//! iPhone charging time estimated from a fixed charging curve.

mod catalog;
mod curve;

pub use catalog::{
    compatible_chargers, ChargerModel, ChargerSpec, Connector, PhoneModel, PhoneSpec,
};
pub use curve::{
    integrate, speed_multiplier, BandTime, CurveBand, Integration, MIN_STEP_PERCENT,
};

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_STEP_PERCENT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingInput {
    pub phone: PhoneModel,
    pub charger: ChargerModel,
    pub start_percent: u8,
    pub end_percent: u8,
}

impl ChargingInput {
    pub fn example() -> Self {
        Self {
            phone: PhoneModel::Iphone15Pro,
            charger: ChargerModel::UsbC20w,
            start_percent: 20,
            end_percent: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargingEstimate {
    pub phone: PhoneModel,
    pub phone_label: &'static str,
    pub charger: ChargerModel,
    pub charger_label: &'static str,
    pub compatible: bool,
    pub effective_watts: f64,
    pub start_percent: u8,
    pub end_percent: u8,
    pub minutes: f64,
    pub bands: Vec<BandTime>,
}

impl ChargingEstimate {
    /// Clock time the target percentage is reached when charging begins at `started_at`.
    /// `None` when the result would fall outside the representable date range.
    pub fn completes_at(&self, started_at: NaiveDateTime) -> Option<NaiveDateTime> {
        let seconds = (self.minutes * 60.0).round() as i64;
        Duration::try_seconds(seconds).and_then(|elapsed| started_at.checked_add_signed(elapsed))
    }

    /// Whole hours and remaining minutes, for display.
    pub fn hours_and_minutes(&self) -> (u32, u32) {
        let total = self.minutes.round().max(0.0) as u32;
        (total / 60, total % 60)
    }
}

/// Charger output reaching the battery, capped by what the phone accepts.
pub fn effective_watts(phone: PhoneModel, charger: ChargerModel) -> f64 {
    let charger = charger.spec();
    (charger.max_watts * charger.efficiency).min(phone.spec().max_watts)
}

pub fn estimate(input: &ChargingInput) -> ChargingEstimate {
    estimate_with_step(input, DEFAULT_STEP_PERCENT)
}

/// Same as [`estimate`] with a custom integration step in percentage points.
pub fn estimate_with_step(input: &ChargingInput, step: f64) -> ChargingEstimate {
    let watts = effective_watts(input.phone, input.charger);
    let integration = integrate(
        input.phone.spec().battery_mah,
        watts,
        f64::from(input.start_percent),
        f64::from(input.end_percent.min(100)),
        step,
    );

    let estimate = ChargingEstimate {
        phone: input.phone,
        phone_label: input.phone.label(),
        charger: input.charger,
        charger_label: input.charger.label(),
        compatible: compatible_chargers(input.phone).contains(&input.charger),
        effective_watts: watts,
        start_percent: input.start_percent,
        end_percent: input.end_percent,
        minutes: integration.minutes,
        bands: integration.bands,
    };

    debug!(
        phone = estimate.phone_label,
        charger = estimate.charger_label,
        minutes = estimate.minutes,
        "estimated charging time"
    );
    estimate
}
