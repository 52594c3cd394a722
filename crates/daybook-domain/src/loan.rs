//! Domain type for loans and the amortization math derived from them.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A loan repaid between `start_date` and `end_date` at a yearly percentage
/// rate. Payments reduce `remaining_amount`; the original principal stays in
/// `amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loan {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub remaining_amount: f64,
    pub interest_rate: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: LoanKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Loan {
    /// New loans start with the full principal outstanding.
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        interest_rate: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: LoanKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            remaining_amount: amount,
            interest_rate,
            start_date,
            end_date,
            kind,
            notes: None,
        }
    }

    /// Fraction of the principal already repaid. Zero for non-positive
    /// principals.
    pub fn progress(&self) -> f64 {
        if self.amount <= 0.0 {
            return 0.0;
        }
        1.0 - (self.remaining_amount / self.amount)
    }

    /// Whole months between start and end. Fractional months round down.
    pub fn term_months(&self) -> i64 {
        let mut months = (self.end_date.year() as i64 - self.start_date.year() as i64) * 12
            + (self.end_date.month() as i64 - self.start_date.month() as i64);
        if self.end_date.day() < self.start_date.day() {
            months -= 1;
        }
        months
    }

    /// Standard amortized monthly payment: `P * i(1+i)^n / ((1+i)^n - 1)`
    /// with `i = rate/1200`. Zero-length terms pay nothing; a zero rate
    /// reduces to `P/n`.
    pub fn monthly_payment(&self) -> f64 {
        let months = self.term_months();
        if months <= 0 {
            return 0.0;
        }
        let n = months as f64;
        let monthly_rate = self.interest_rate / 1200.0;
        if monthly_rate == 0.0 {
            return self.amount / n;
        }
        let growth = (1.0 + monthly_rate).powf(n);
        self.amount * (monthly_rate * growth) / (growth - 1.0)
    }
}

impl Identifiable for Loan {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for Loan {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Displayable for Loan {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.kind)
    }
}

/// Supported loan types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoanKind {
    Personal,
    Home,
    Vehicle,
    Student,
    Business,
    Other,
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoanKind::Personal => "Personal",
            LoanKind::Home => "Home",
            LoanKind::Vehicle => "Vehicle",
            LoanKind::Student => "Student",
            LoanKind::Business => "Business",
            LoanKind::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(rate: f64, start: NaiveDate, end: NaiveDate) -> Loan {
        Loan::new("Test", 12000.0, rate, start, end, LoanKind::Personal)
    }

    #[test]
    fn term_truncates_fractional_months() {
        let full = loan(0.0, date(2024, 1, 15), date(2025, 1, 15));
        assert_eq!(full.term_months(), 12);

        let short = loan(0.0, date(2024, 1, 15), date(2025, 1, 14));
        assert_eq!(short.term_months(), 11);
    }

    #[test]
    fn zero_rate_payment_splits_principal_evenly() {
        let loan = loan(0.0, date(2024, 1, 1), date(2025, 1, 1));
        assert_eq!(loan.monthly_payment(), 1000.0);
    }

    #[test]
    fn zero_term_pays_nothing() {
        let loan = loan(10.0, date(2024, 1, 1), date(2024, 1, 20));
        assert_eq!(loan.term_months(), 0);
        assert_eq!(loan.monthly_payment(), 0.0);
    }

    #[test]
    fn amortized_payments_retire_the_principal() {
        let loan = loan(12.0, date(2024, 1, 1), date(2026, 1, 1));
        let months = loan.term_months();
        let payment = loan.monthly_payment();
        assert!(payment > 0.0);

        let monthly_rate = loan.interest_rate / 1200.0;
        let mut balance = loan.amount;
        for _ in 0..months {
            balance = balance * (1.0 + monthly_rate) - payment;
        }
        assert!(balance.abs() < 1e-6, "residual balance {balance}");
    }

    #[test]
    fn progress_tracks_repaid_fraction() {
        let mut loan = loan(0.0, date(2024, 1, 1), date(2025, 1, 1));
        assert_eq!(loan.progress(), 0.0);
        loan.remaining_amount = 9000.0;
        assert_eq!(loan.progress(), 0.25);

        loan.amount = 0.0;
        assert_eq!(loan.progress(), 0.0);
    }
}
