use pocketcalc::calculators::appliance::{self, ApplianceCatalog, EnergyInput};
use pocketcalc::calculators::bills::{self, BillCategory, BillFrequency, BillItem, BillList};
use pocketcalc::calculators::charging::{
    self, speed_multiplier, ChargerModel, ChargingInput, PhoneModel, MIN_STEP_PERCENT,
};
use pocketcalc::calculators::phone::{self, EfficiencyTier, PhoneUsageInput};
use pocketcalc::calculators::rent_vs_buy::{
    self, BreakEvenPoint, MortgageSchedule, RentVsBuyForm, RentVsBuyInput, MAX_YEARS,
};
use pocketcalc::calculators::rental_cost::{self, RentalCostInput};

const EPSILON: f64 = 1e-6;

fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{context}: expected {expected}, got {actual}"
    );
}

#[test]
fn active_energy_follows_watt_hours() {
    for (watts, hours) in [(100.0, 5.0), (1500.0, 0.5), (60.0, 24.0), (3.5, 12.25)] {
        let result = appliance::calculate(&EnergyInput {
            watts,
            hours_per_day: hours,
            rate: 0.2,
            ..EnergyInput::default()
        });
        assert_close(
            result.active_kwh_per_day,
            watts * hours / 1000.0,
            "active kWh",
        );
        assert_close(result.daily_cost, result.daily_kwh * 0.2, "daily cost");
        assert_close(result.monthly_kwh, result.daily_kwh * 30.0, "monthly kWh");
        assert_close(result.yearly_kwh, result.daily_kwh * 365.0, "yearly kWh");
    }
}

#[test]
fn catalog_profile_drives_energy_estimate() {
    let catalog = ApplianceCatalog::standard();
    let tv = catalog.find("led tv").expect("LED TV in catalog");

    let mut input = EnergyInput {
        hours_per_day: 4.0,
        rate: 0.15,
        ..EnergyInput::default()
    };
    input.apply_profile(tv);
    let result = appliance::calculate(&input);

    assert!(input.include_standby);
    assert_close(result.active_kwh_per_day, 0.4, "tv active kWh");
    assert_close(result.standby_kwh_per_day, 0.02, "tv standby kWh");
}

#[test]
fn full_term_amortization_repays_loan() {
    for (loan, rate, years) in [(250_000.0, 6.5, 30.0), (80_000.0, 3.25, 15.0), (10_000.0, 0.0, 5.0)] {
        let schedule = MortgageSchedule::new(loan, rate, years);
        let rows = schedule.rows(schedule.term_months);
        let principal: f64 = rows.iter().map(|row| row.principal).sum();
        assert!(
            (principal - loan).abs() < 1e-4,
            "loan {loan} at {rate}% repaid {principal}"
        );
        assert!(rows.last().expect("schedule has rows").balance.abs() < 1e-4);
    }
}

#[test]
fn break_even_is_immediate_when_buying_is_cheaper_per_month() {
    let input = RentVsBuyInput {
        home_price: 200_000.0,
        down_payment: 200_000.0,
        monthly_rent: 1500.0,
        ..RentVsBuyInput::default()
    };
    let result = rent_vs_buy::calculate(&input);
    assert_eq!(result.break_even, BreakEvenPoint::IMMEDIATE);
}

#[test]
fn example_comparison_is_internally_consistent() {
    let input = RentVsBuyInput::example();
    let result = rent_vs_buy::calculate(&input);

    assert_eq!(result.renting.years.len(), 5);
    assert_eq!(result.buying.yearly_amortization.len(), 5);
    let yearly_principal: f64 = result
        .buying
        .yearly_amortization
        .iter()
        .map(|year| year.principal)
        .sum();
    assert_close(yearly_principal, result.buying.principal_paid, "principal paid");
    assert_close(
        result.net_difference,
        result.buying.total_cost - result.buying.equity - result.renting.total_cost,
        "net difference",
    );
}

#[test]
fn comparison_window_and_term_are_bounded() {
    let max_months = (MAX_YEARS * 12.0) as usize;
    for (term_years, years) in [(20_000.0, 1e10), (1e300, 150.0), (30.0, f64::INFINITY)] {
        let input = RentVsBuyInput {
            term_years,
            years_to_analyze: years,
            ..RentVsBuyInput::example()
        };
        let result = rent_vs_buy::calculate(&input);
        assert!(result.renting.years.len() <= MAX_YEARS as usize);
        assert!(result.buying.yearly_amortization.len() <= MAX_YEARS as usize);
        assert!(result.buying.schedule.rows(u32::MAX).len() <= max_months);
        for value in [
            result.buying.monthly.total,
            result.buying.total_cost,
            result.buying.equity,
            result.renting.total_cost,
            result.break_even.years,
            result.net_difference,
        ] {
            assert!(value.is_finite(), "term {term_years}, years {years}: {value}");
        }
    }
}

#[test]
fn long_term_payment_matches_capped_term() {
    let capped = MortgageSchedule::new(320_000.0, 6.5, MAX_YEARS);
    let long = MortgageSchedule::new(320_000.0, 6.5, 20_000.0);
    assert!(long.monthly_payment.is_finite());
    assert_close(long.monthly_payment, capped.monthly_payment, "long term payment");
}

#[test]
fn incomplete_form_does_not_compute() {
    let form = RentVsBuyForm {
        home_price: "350000".to_string(),
        ..RentVsBuyForm::default()
    };
    assert!(form.validate().is_err());
    assert!(form.calculate().is_none());
}

#[test]
fn weekly_bill_normalises_to_433() {
    let list = BillList::from_items(vec![BillItem::new(
        "Cleaner",
        "100",
        BillCategory::Other,
        BillFrequency::Weekly,
    )]);
    let summary = list.summary();
    assert_close(summary.monthly_total, 433.0, "weekly bill");
    assert_close(summary.yearly_total, 433.0 * 12.0, "yearly total");
}

#[test]
fn example_bills_round_trip_through_csv() {
    let data = "name,amount,category,frequency\n\
                Rent,1400,Housing,Monthly\n\
                Electric,90,Utilities,Monthly\n\
                Groceries,120,Food,Weekly\n\
                Car Insurance,600,Insurance,Quarterly\n\
                Streaming,15.99,Subscriptions,Monthly\n";
    let imported = bills::read_csv(data.as_bytes()).expect("csv imports");
    assert_eq!(imported, BillList::example());
}

#[test]
fn charging_matches_manual_left_sum() {
    let input = ChargingInput::example();
    assert_eq!(input.phone, PhoneModel::Iphone15Pro);

    let battery_mah = input.phone.spec().battery_mah;
    assert_eq!(battery_mah, 3274.0);
    let watts = charging::effective_watts(input.phone, input.charger);

    let mut expected_hours = 0.0;
    for percent in 20..80 {
        let energy_mah = battery_mah / 100.0;
        let speed = watts * speed_multiplier(f64::from(percent));
        expected_hours += energy_mah * 3.7 / (speed * 1000.0);
    }

    let estimate = charging::estimate(&input);
    assert!(estimate.compatible);
    assert_close(estimate.minutes, expected_hours * 60.0, "charging minutes");

    let band_minutes: f64 = estimate.bands.iter().map(|band| band.minutes).sum();
    assert_close(band_minutes, estimate.minutes, "band minutes");
}

#[test]
fn charging_step_changes_the_approximation() {
    let input = ChargingInput {
        start_percent: 5,
        end_percent: 95,
        ..ChargingInput::example()
    };
    let fine = charging::estimate_with_step(&input, 1.0);
    let coarse = charging::estimate_with_step(&input, 7.0);
    assert!((fine.minutes - coarse.minutes).abs() > 1e-3);
}

#[test]
fn extreme_steps_terminate_with_bounded_bands() {
    let input = ChargingInput {
        start_percent: 0,
        end_percent: 100,
        ..ChargingInput::example()
    };
    let floor = charging::estimate_with_step(&input, MIN_STEP_PERCENT);
    for step in [1e-20, f64::MIN_POSITIVE, 1e-300] {
        let estimate = charging::estimate_with_step(&input, step);
        assert_eq!(estimate.minutes, floor.minutes, "step {step}");
        assert!(estimate.bands.len() <= 6);
    }

    for step in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
        assert_eq!(charging::estimate_with_step(&input, step).minutes, 0.0);
    }

    let single = charging::estimate_with_step(&input, f64::INFINITY);
    assert!(single.minutes.is_finite() && single.minutes > 0.0);
}

#[test]
fn lightning_charger_is_flagged_for_usb_c_phone() {
    let input = ChargingInput {
        charger: ChargerModel::UsbA12wLightning,
        ..ChargingInput::example()
    };
    let estimate = charging::estimate(&input);
    assert!(!estimate.compatible);
    assert!(estimate.minutes > 0.0);
}

#[test]
fn renting_example_totals() {
    let result = rental_cost::calculate(&RentalCostInput::example());
    assert_close(result.total_monthly_cost, 1755.0, "total monthly");
    assert_close(result.total_lease_cost, 22_560.0, "total lease");
}

#[test]
fn identical_inputs_give_identical_results() {
    let energy = EnergyInput::example();
    assert_eq!(appliance::calculate(&energy), appliance::calculate(&energy));

    let phone_input = PhoneUsageInput::example();
    assert_eq!(phone::calculate(&phone_input), phone::calculate(&phone_input));

    let comparison = RentVsBuyInput::example();
    assert_eq!(
        rent_vs_buy::calculate(&comparison),
        rent_vs_buy::calculate(&comparison)
    );

    let rental = RentalCostInput::example();
    assert_eq!(rental_cost::calculate(&rental), rental_cost::calculate(&rental));

    let list = BillList::example();
    assert_eq!(list.summary(), list.summary());

    let charging_input = ChargingInput::example();
    assert_eq!(
        charging::estimate(&charging_input),
        charging::estimate(&charging_input)
    );
}

#[test]
fn empty_inputs_degrade_to_zero() {
    let energy = appliance::calculate(&EnergyInput::default());
    assert_eq!(energy.yearly_cost, 0.0);

    let phone_result = phone::calculate(&PhoneUsageInput::default());
    assert_eq!(phone_result.cost_per_minute, 0.0);
    assert_eq!(phone_result.cost_per_gb, 0.0);
    assert_eq!(phone_result.tier, EfficiencyTier::NoUsageData);

    let comparison = RentVsBuyForm::default().to_input();
    let result = rent_vs_buy::calculate(&comparison);
    assert_eq!(result.buying.total_cost, 0.0);
    assert_eq!(result.renting.total_cost, 0.0);

    let rental = rental_cost::calculate(&RentalCostInput::default());
    assert_eq!(rental.total_monthly_cost, 0.0);
    assert!(rental.breakdown.is_empty());

    assert_eq!(BillList::default().summary().monthly_total, 0.0);
}
