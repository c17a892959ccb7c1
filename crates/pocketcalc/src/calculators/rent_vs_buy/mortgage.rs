use serde::Serialize;

/// Longest term and analysis window simulated; longer inputs are treated as this many years.
pub const MAX_YEARS: f64 = 100.0;
/// Annual rates above this are treated as this rate.
pub const MAX_ANNUAL_RATE_PERCENT: f64 = 1000.0;

/// Fixed-rate loan terms with the standard annuity payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MortgageSchedule {
    pub loan_amount: f64,
    pub monthly_rate: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

impl MortgageSchedule {
    pub fn new(loan_amount: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        let loan_amount = if loan_amount.is_finite() {
            loan_amount.max(0.0)
        } else {
            0.0
        };
        let annual_rate = if annual_rate_percent > 0.0 {
            annual_rate_percent.min(MAX_ANNUAL_RATE_PERCENT)
        } else {
            0.0
        };
        let monthly_rate = annual_rate / 100.0 / 12.0;
        let term_months = whole_months(term_years);

        Self {
            loan_amount,
            monthly_rate,
            term_months,
            monthly_payment: annuity_payment(loan_amount, monthly_rate, term_months),
        }
    }

    /// Month-by-month split of each payment, stopping after `months` or once the balance is
    /// paid off.
    pub fn rows(&self, months: u32) -> Vec<AmortizationRow> {
        let mut rows = Vec::new();
        let mut balance = self.loan_amount;

        for month in 1..=months.min(self.term_months) {
            if balance <= 0.0 {
                break;
            }
            let interest = balance * self.monthly_rate;
            let principal = (self.monthly_payment - interest).min(balance);
            balance -= principal;
            rows.push(AmortizationRow {
                month,
                payment: interest + principal,
                interest,
                principal,
                balance: balance.max(0.0),
            });
        }

        rows
    }

    pub fn principal_paid(&self, months: u32) -> f64 {
        self.rows(months).iter().map(|row| row.principal).sum()
    }

    pub fn yearly(&self, months: u32) -> Vec<AmortizationYear> {
        let mut years: Vec<AmortizationYear> = Vec::new();
        for row in self.rows(months) {
            let year = (row.month - 1) / 12 + 1;
            match years.last_mut() {
                Some(entry) if entry.year == year => {
                    entry.interest += row.interest;
                    entry.principal += row.principal;
                    entry.ending_balance = row.balance;
                }
                _ => years.push(AmortizationYear {
                    year,
                    interest: row.interest,
                    principal: row.principal,
                    ending_balance: row.balance,
                }),
            }
        }
        years
    }
}

fn annuity_payment(loan_amount: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 || loan_amount <= 0.0 {
        return 0.0;
    }

    let n = term_months as f64;
    if monthly_rate > 0.0 {
        loan_amount * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-n))
    } else {
        loan_amount / n
    }
}

/// Whole months in `years`, capped at [`MAX_YEARS`]. NaN and non-positive input give zero.
pub(crate) fn whole_months(years: f64) -> u32 {
    if years > 0.0 {
        (years.min(MAX_YEARS) * 12.0).floor() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_payment_matches_known_value() {
        let schedule = MortgageSchedule::new(200_000.0, 6.0, 30.0);
        assert_eq!(schedule.term_months, 360);
        assert!((schedule.monthly_payment - 1199.101).abs() < 0.01);
    }

    #[test]
    fn full_term_principal_repays_the_loan() {
        for (loan, rate, years) in [(250_000.0, 6.5, 30.0), (80_000.0, 3.25, 15.0), (1.0, 12.0, 1.0)] {
            let schedule = MortgageSchedule::new(loan, rate, years);
            let paid = schedule.principal_paid(schedule.term_months);
            assert!(
                (paid - loan).abs() < 1e-6 * loan.max(1.0),
                "loan {loan} repaid {paid}"
            );
        }
    }

    #[test]
    fn zero_rate_falls_back_to_straight_line() {
        let schedule = MortgageSchedule::new(120_000.0, 0.0, 10.0);
        assert_eq!(schedule.monthly_payment, 1000.0);
        assert!((schedule.principal_paid(24) - 24_000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_term_or_loan_has_no_payment() {
        assert_eq!(MortgageSchedule::new(100_000.0, 5.0, 0.0).monthly_payment, 0.0);
        let empty = MortgageSchedule::new(0.0, 5.0, 30.0);
        assert_eq!(empty.monthly_payment, 0.0);
        assert!(empty.rows(60).is_empty());
    }

    #[test]
    fn very_long_term_is_capped_and_finite() {
        let schedule = MortgageSchedule::new(320_000.0, 6.5, 20_000.0);
        assert_eq!(schedule.term_months, 1200);
        assert!(schedule.monthly_payment.is_finite());
        assert_eq!(schedule, MortgageSchedule::new(320_000.0, 6.5, MAX_YEARS));
        assert_eq!(schedule.rows(u32::MAX).len(), 1200);
    }

    #[test]
    fn extreme_rate_stays_finite() {
        let schedule = MortgageSchedule::new(320_000.0, 1e308, 30.0);
        assert_eq!(schedule.monthly_rate, MAX_ANNUAL_RATE_PERCENT / 100.0 / 12.0);
        assert!(schedule.monthly_payment.is_finite());
        assert!(schedule
            .rows(360)
            .iter()
            .all(|row| row.principal.is_finite() && row.balance.is_finite()));
    }

    #[test]
    fn nan_term_has_no_payment() {
        let schedule = MortgageSchedule::new(100_000.0, 5.0, f64::NAN);
        assert_eq!(schedule.term_months, 0);
        assert_eq!(schedule.monthly_payment, 0.0);
    }

    #[test]
    fn yearly_rollup_sums_rows() {
        let schedule = MortgageSchedule::new(300_000.0, 7.0, 30.0);
        let years = schedule.yearly(30);
        assert_eq!(years.len(), 3);
        assert_eq!(years[2].year, 3);
        let rolled: f64 = years.iter().map(|year| year.principal).sum();
        assert!((rolled - schedule.principal_paid(30)).abs() < 1e-9);
    }
}
