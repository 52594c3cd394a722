use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Reminder not found: {0}")]
    ReminderNotFound(Uuid),
    #[error("Group not found: {0}")]
    GroupNotFound(Uuid),
    #[error("Shopping item not found: {0}")]
    ShoppingItemNotFound(Uuid),
    #[error("Expense period not found: {0}")]
    PeriodNotFound(Uuid),
    #[error("No expense period available")]
    NoActivePeriod,
    #[error("Savings goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("Investment not found: {0}")]
    InvestmentNotFound(Uuid),
    #[error("Loan not found: {0}")]
    LoanNotFound(Uuid),
    #[error("Reminder references unknown group: {0}")]
    UnknownGroup(Uuid),
    #[error("Payment of {payment} exceeds remaining balance {remaining}")]
    PaymentExceedsBalance { payment: f64, remaining: f64 },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}
