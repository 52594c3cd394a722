//! Aggregation helpers over record collections.
//!
//! Everything here is pure and recomputed from the full collections on each
//! call; nothing is cached between mutations.

use serde::{Deserialize, Serialize};

use daybook_domain::{Expense, ExpenseCategory, Investment, Snapshot};

/// Collection-wide totals for the investment portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSummary {
    pub total_invested: f64,
    pub total_value: f64,
    pub total_profit: f64,
    pub profit_percent: f64,
}

/// Per-category share of an expense list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
}

/// Aggregates snapshot data for reporting.
pub struct SummaryService;

impl SummaryService {
    /// Portfolio totals across all investments. Profit percentage is zero
    /// when nothing has been invested.
    pub fn portfolio(investments: &[Investment]) -> PortfolioSummary {
        let total_invested: f64 = investments.iter().map(|inv| inv.amount).sum();
        let total_value: f64 = investments.iter().map(|inv| inv.current_value).sum();
        let total_profit = total_value - total_invested;
        let profit_percent = if total_invested <= 0.0 {
            0.0
        } else {
            total_profit / total_invested * 100.0
        };
        PortfolioSummary {
            total_invested,
            total_value,
            total_profit,
            profit_percent,
        }
    }

    /// Store-wide net worth: investment value plus saved amounts minus
    /// outstanding loan balances.
    pub fn net_worth(snapshot: &Snapshot) -> f64 {
        let investments: f64 = snapshot
            .investments
            .iter()
            .map(|inv| inv.current_value)
            .sum();
        let savings: f64 = snapshot.goals.iter().map(|goal| goal.current_amount).sum();
        let debts: f64 = snapshot.loans.iter().map(|loan| loan.remaining_amount).sum();
        investments + savings - debts
    }

    /// Per-category totals, shares, and counts for an expense list, largest
    /// first. Categories without expenses are omitted.
    pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategorySummary> {
        let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
        let mut rows: Vec<CategorySummary> = ExpenseCategory::ALL
            .iter()
            .filter_map(|&category| {
                let matching: Vec<&Expense> = expenses
                    .iter()
                    .filter(|expense| expense.category == category)
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                let amount: f64 = matching.iter().map(|expense| expense.amount).sum();
                let percentage = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                Some(CategorySummary {
                    category,
                    amount,
                    percentage,
                    count: matching.len(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
        rows
    }
}
