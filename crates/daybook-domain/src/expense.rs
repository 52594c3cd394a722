//! Domain types for expense periods, incomes, and expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A user-defined date range aggregating incomes and expenses for balance
/// reporting. The range is half-open: `start_date <= d < end_date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpensePeriod {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}

impl ExpensePeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            incomes: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }

    /// Sum of all income amounts, recomputed on every call.
    pub fn income(&self) -> f64 {
        self.incomes.iter().map(|income| income.amount).sum()
    }

    /// Sum of all expense amounts, recomputed on every call.
    pub fn total_expense(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn balance(&self) -> f64 {
        self.income() - self.total_expense()
    }

    pub fn expenses_in_category(&self, category: ExpenseCategory) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .collect()
    }

    pub fn total_for_category(&self, category: ExpenseCategory) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(|expense| expense.amount)
            .sum()
    }
}

impl Identifiable for ExpensePeriod {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Money coming in during a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Income {
    pub fn new(title: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Identifiable for Income {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for Income {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Money going out during a period, always categorised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            category,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for Expense {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.category)
    }
}

/// Supported expense categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Groceries,
    Transport,
    Bills,
    Entertainment,
    Health,
    Clothing,
    Education,
    Personal,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Transport,
        ExpenseCategory::Bills,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Clothing,
        ExpenseCategory::Education,
        ExpenseCategory::Personal,
        ExpenseCategory::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Clothing => "Clothing",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Personal => "Personal",
            ExpenseCategory::Other => "Other",
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

    #[test]
    fn balance_is_income_minus_expenses() {
        let mut period = ExpensePeriod::new(date(2024, 1, 1), date(2024, 2, 1));
        period.incomes.push(Income::new("Salary", 200.0, date(2024, 1, 1)));
        period.expenses.push(Expense::new(
            "Groceries",
            30.0,
            ExpenseCategory::Groceries,
            date(2024, 1, 5),
        ));

        assert_eq!(period.income(), 200.0);
        assert_eq!(period.total_expense(), 30.0);
        assert_eq!(period.balance(), 170.0);
    }

    #[test]
    fn category_totals_only_count_matching_expenses() {
        let mut period = ExpensePeriod::new(date(2024, 1, 1), date(2024, 2, 1));
        period.expenses.push(Expense::new(
            "Bus pass",
            50.0,
            ExpenseCategory::Transport,
            date(2024, 1, 3),
        ));
        period.expenses.push(Expense::new(
            "Cinema",
            20.0,
            ExpenseCategory::Entertainment,
            date(2024, 1, 4),
        ));

        assert_eq!(period.total_for_category(ExpenseCategory::Transport), 50.0);
        assert_eq!(period.expenses_in_category(ExpenseCategory::Transport).len(), 1);
        assert_eq!(period.total_for_category(ExpenseCategory::Health), 0.0);
    }

    #[test]
    fn period_range_is_half_open() {
        let period = ExpensePeriod::new(date(2024, 1, 1), date(2024, 2, 1));
        assert!(period.contains(date(2024, 1, 1)));
        assert!(period.contains(date(2024, 1, 31)));
        assert!(!period.contains(date(2024, 2, 1)));
        assert!(!period.contains(date(2023, 12, 31)));
    }
}
