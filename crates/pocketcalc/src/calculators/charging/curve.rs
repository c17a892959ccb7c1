use serde::Serialize;

const NOMINAL_VOLTAGE: f64 = 3.7;

/// Fraction of the effective wattage the battery accepts at `percent` state of charge.
pub fn speed_multiplier(percent: f64) -> f64 {
    match percent {
        p if (0.0..10.0).contains(&p) => 0.70,
        p if (10.0..50.0).contains(&p) => 1.00,
        p if (50.0..80.0).contains(&p) => 0.60,
        p if (80.0..90.0).contains(&p) => 0.30,
        p if (90.0..95.0).contains(&p) => 0.15,
        p if (95.0..=100.0).contains(&p) => 0.05,
        _ => 0.50,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveBand {
    Warmup,
    Fast,
    Tapering,
    Slow,
    Trickle,
    Top,
}

impl CurveBand {
    pub fn for_percent(percent: f64) -> Self {
        match percent {
            p if p < 10.0 => Self::Warmup,
            p if p < 50.0 => Self::Fast,
            p if p < 80.0 => Self::Tapering,
            p if p < 90.0 => Self::Slow,
            p if p < 95.0 => Self::Trickle,
            _ => Self::Top,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Warmup => "0-10%",
            Self::Fast => "10-50%",
            Self::Tapering => "50-80%",
            Self::Slow => "80-90%",
            Self::Trickle => "90-95%",
            Self::Top => "95-100%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandTime {
    pub band: CurveBand,
    pub label: &'static str,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Integration {
    pub minutes: f64,
    pub bands: Vec<BandTime>,
}

/// Smallest integration step accepted; finer steps are raised to this value.
pub const MIN_STEP_PERCENT: f64 = 0.01;

/// Left Riemann sum of charging time from `start` to `end` percent. Each step is
/// evaluated at its starting percentage; the final step is shortened to land on `end`.
/// The window is clamped to `0..=100` and the step to `MIN_STEP_PERCENT..=100`, so at
/// most `100 / MIN_STEP_PERCENT` steps are taken.
pub fn integrate(
    battery_mah: f64,
    effective_watts: f64,
    start: f64,
    end: f64,
    step: f64,
) -> Integration {
    if !(start < end && battery_mah > 0.0 && effective_watts > 0.0 && step > 0.0) {
        return Integration::default();
    }

    let start = start.clamp(0.0, 100.0);
    let end = end.clamp(0.0, 100.0);
    let step = step.clamp(MIN_STEP_PERCENT, 100.0);
    if start >= end {
        return Integration::default();
    }

    let steps = ((end - start) / step).ceil() as u32;
    let mut hours = 0.0;
    let mut bands: Vec<BandTime> = Vec::new();

    for index in 0..steps {
        let percent = start + f64::from(index) * step;
        let step_size = step.min(end - percent);
        if step_size <= 0.0 {
            break;
        }
        let energy_mah = battery_mah * step_size / 100.0;
        let speed_watts = effective_watts * speed_multiplier(percent);
        let step_hours = energy_mah * NOMINAL_VOLTAGE / (speed_watts * 1000.0);
        hours += step_hours;

        let band = CurveBand::for_percent(percent);
        match bands.last_mut() {
            Some(entry) if entry.band == band => entry.minutes += step_hours * 60.0,
            _ => bands.push(BandTime {
                band,
                label: band.label(),
                minutes: step_hours * 60.0,
            }),
        }
    }

    Integration {
        minutes: hours * 60.0,
        bands,
    }
}
