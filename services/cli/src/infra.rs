use chrono::NaiveDateTime;
use pocketcalc::calculators::bills::{BillCategory, BillFrequency, BillItem};
use pocketcalc::calculators::charging::{ChargerModel, PhoneModel, MIN_STEP_PERCENT};
use pocketcalc::calculators::input::parse_percentage;
use pocketcalc::calculators::phone::PlanType;

pub(crate) fn parse_phone(raw: &str) -> Result<PhoneModel, String> {
    PhoneModel::find(raw).ok_or_else(|| {
        format!("unknown phone '{raw}' (see `pocketcalc catalog phones` for supported models)")
    })
}

pub(crate) fn parse_charger(raw: &str) -> Result<ChargerModel, String> {
    ChargerModel::find(raw).ok_or_else(|| {
        format!("unknown charger '{raw}' (see `pocketcalc catalog chargers` for options)")
    })
}

pub(crate) fn parse_plan(raw: &str) -> Result<PlanType, String> {
    let needle = raw.trim();
    PlanType::ordered()
        .into_iter()
        .find(|plan| {
            plan.label().eq_ignore_ascii_case(needle)
                || format!("{plan:?}").eq_ignore_ascii_case(needle)
        })
        .ok_or_else(|| format!("unknown plan type '{raw}'"))
}

/// Integration step in percentage points, rejected outside `MIN_STEP_PERCENT..=100`.
pub(crate) fn parse_step(raw: &str) -> Result<f64, String> {
    let step: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("step '{raw}' is not a number"))?;
    if (MIN_STEP_PERCENT..=100.0).contains(&step) {
        Ok(step)
    } else {
        Err(format!(
            "step must be between {MIN_STEP_PERCENT} and 100 percentage points (got '{raw}')"
        ))
    }
}

pub(crate) fn parse_percent(raw: &str) -> Result<u8, String> {
    Ok(parse_percentage(raw, 0))
}

/// `name,amount[,category[,frequency]]`; the amount is kept as typed.
pub(crate) fn parse_bill(raw: &str) -> Result<BillItem, String> {
    let mut parts = raw.split(',').map(str::trim);
    let name = parts.next().unwrap_or_default();
    let amount = parts.next().unwrap_or_default();
    let category = match parts.next().filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<BillCategory>()
            .map_err(|err| err.to_string())?,
        None => BillCategory::default(),
    };
    let frequency = match parts.next().filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<BillFrequency>()
            .map_err(|err| err.to_string())?,
        None => BillFrequency::default(),
    };

    Ok(BillItem::new(name, amount, category, frequency))
}

pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD HH:MM ({err})"))
}
