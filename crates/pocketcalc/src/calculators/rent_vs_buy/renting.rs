use serde::Serialize;

use super::mortgage::MAX_YEARS;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentYear {
    pub year: u32,
    pub monthly_rent: f64,
    pub yearly_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RentingResult {
    pub years: Vec<RentYear>,
    pub total_cost: f64,
    pub average_monthly_cost: f64,
    pub final_rent: f64,
}

/// Escalates rent once per whole year. Partial trailing years are not simulated but still
/// count toward the averaging window, which is capped at `MAX_YEARS`.
pub(crate) fn project(
    monthly_rent: f64,
    annual_increase_percent: f64,
    renters_insurance: f64,
    years: f64,
) -> RentingResult {
    let increase = annual_increase_percent / 100.0;
    let years = analysis_years(years);
    let whole_years = years.floor() as u32;

    let mut current_rent = monthly_rent.max(0.0);
    let mut total_cost = 0.0;
    let mut rows = Vec::new();

    for year in 1..=whole_years {
        let yearly_cost = current_rent * 12.0 + renters_insurance.max(0.0) * 12.0;
        rows.push(RentYear {
            year,
            monthly_rent: current_rent,
            yearly_cost,
        });
        total_cost += yearly_cost;
        current_rent *= 1.0 + increase;
    }

    let window_months = years * 12.0;
    let average_monthly_cost = if window_months > 0.0 {
        total_cost / window_months
    } else {
        0.0
    };

    RentingResult {
        years: rows,
        total_cost,
        average_monthly_cost,
        final_rent: current_rent,
    }
}

/// Clamps the analysis window into `0..=MAX_YEARS`; NaN counts as zero.
pub(crate) fn analysis_years(years: f64) -> f64 {
    if years > 0.0 {
        years.min(MAX_YEARS)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_compounds_each_year() {
        let result = project(1000.0, 10.0, 0.0, 2.0);
        assert_eq!(result.years.len(), 2);
        assert!((result.total_cost - (12_000.0 + 13_200.0)).abs() < 1e-9);
        assert!((result.final_rent - 1210.0).abs() < 1e-9);
        assert!((result.average_monthly_cost - 25_200.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn insurance_is_not_escalated() {
        let result = project(1000.0, 3.0, 20.0, 2.0);
        assert!((result.years[1].yearly_cost - (1030.0 * 12.0 + 240.0)).abs() < 1e-9);
    }

    #[test]
    fn fractional_years_only_simulate_whole_years() {
        let result = project(1000.0, 0.0, 0.0, 2.5);
        assert_eq!(result.years.len(), 2);
        assert!((result.average_monthly_cost - 24_000.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn huge_window_is_capped() {
        let result = project(1000.0, 0.0, 0.0, 1e10);
        assert_eq!(result.years.len(), 100);
        assert!((result.total_cost - 1_200_000.0).abs() < 1e-6);
        assert!((result.average_monthly_cost - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn nan_window_is_empty() {
        let result = project(1000.0, 3.0, 0.0, f64::NAN);
        assert!(result.years.is_empty());
        assert_eq!(result.average_monthly_cost, 0.0);
    }

    #[test]
    fn zero_years_is_empty() {
        let result = project(1500.0, 3.0, 10.0, 0.0);
        assert!(result.years.is_empty());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.average_monthly_cost, 0.0);
        assert_eq!(result.final_rent, 1500.0);
    }
}
