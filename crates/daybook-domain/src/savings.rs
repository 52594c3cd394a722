//! Domain types for savings goals and their transactions.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A target amount the user is saving towards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub transactions: Vec<SavingsTransaction>,
}

impl SavingsGoal {
    pub fn new(title: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            target_amount,
            current_amount: 0.0,
            deadline: None,
            notes: None,
            transactions: Vec::new(),
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_initial_amount(mut self, amount: f64) -> Self {
        self.current_amount = amount;
        self
    }

    /// Fraction of the target reached. Zero when the target is non-positive.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        self.current_amount / self.target_amount
    }

    pub fn remaining_amount(&self) -> f64 {
        self.target_amount - self.current_amount
    }

    /// Records a deposit or withdrawal and adjusts the current amount.
    pub fn apply(&mut self, transaction: SavingsTransaction) {
        self.current_amount += transaction.amount;
        self.transactions.push(transaction);
    }
}

impl Identifiable for SavingsGoal {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for SavingsGoal {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A single deposit (positive) or withdrawal (negative) against a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsTransaction {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SavingsTransaction {
    pub fn new(amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            date: Utc::now().date_naive(),
            notes: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Identifiable for SavingsTransaction {
    fn id(&self) -> Uuid {
        self.id
    }
}
