//! The persisted document holding every record collection.

use serde::{Deserialize, Serialize};

use crate::{
    expense::{Expense, ExpensePeriod},
    investment::Investment,
    loan::Loan,
    reminder::{Group, Reminder},
    savings::SavingsGoal,
    shopping::ShoppingItem,
};

/// Full application state as written to disk: eight collections keyed by
/// name in one document. `expenses` is the standalone expense log kept next
/// to the per-period lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub shopping_items: Vec<ShoppingItem>,
    #[serde(default)]
    pub periods: Vec<ExpensePeriod>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
            && self.groups.is_empty()
            && self.shopping_items.is_empty()
            && self.periods.is_empty()
            && self.goals.is_empty()
            && self.investments.is_empty()
            && self.loans.is_empty()
            && self.expenses.is_empty()
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.reminders.len()
            + self.groups.len()
            + self.shopping_items.len()
            + self.periods.len()
            + self.goals.len()
            + self.investments.len()
            + self.loans.len()
            + self.expenses.len()
    }
}
