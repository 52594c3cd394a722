//! Domain type for tracked investments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A position bought at `amount` and currently worth `current_value`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub current_value: f64,
    pub date: NaiveDate,
    pub kind: InvestmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Investment {
    /// New investments start valued at their purchase amount.
    pub fn new(title: impl Into<String>, amount: f64, kind: InvestmentKind, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            current_value: amount,
            date,
            kind,
            notes: None,
        }
    }

    pub fn with_current_value(mut self, current_value: f64) -> Self {
        self.current_value = current_value;
        self
    }

    pub fn profit(&self) -> f64 {
        self.current_value - self.amount
    }
}

impl Identifiable for Investment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Titled for Investment {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Displayable for Investment {
    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.kind)
    }
}

/// Supported investment classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvestmentKind {
    Stock,
    Crypto,
    Gold,
    Forex,
    Fund,
    Bond,
    Other,
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvestmentKind::Stock => "Stock",
            InvestmentKind::Crypto => "Crypto",
            InvestmentKind::Gold => "Gold",
            InvestmentKind::Forex => "Forex",
            InvestmentKind::Fund => "Fund",
            InvestmentKind::Bond => "Bond",
            InvestmentKind::Other => "Other",
        };
        f.write_str(label)
    }
}
